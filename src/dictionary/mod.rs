/*!
 * Dictionary storage.
 *
 * - `language_pair`: `From-To` identity of a dictionary
 * - `descriptor`: `key=value` files that make dictionaries discoverable
 * - `store`: per-dictionary word to translations mapping on disk
 * - `export`: copying a single pair into a separate file
 * - `registry`: discovery, creation and routing by type name
 */

pub mod descriptor;
pub mod export;
pub mod language_pair;
pub mod registry;
pub mod store;

// Re-export main types
pub use descriptor::Descriptor;
pub use export::export_pair;
pub use language_pair::LanguagePair;
pub use registry::Registry;
pub use store::{Entries, WordStore};
