/*!
 * # vocabman - personal vocabulary manager
 *
 * A Rust library for keeping word lists per language pair on disk.
 *
 * ## Features
 *
 * - One dictionary per language pair (e.g. `English-French`)
 * - Each word maps to an ordered list of translations
 * - Dictionaries are plain pretty-printed JSON files, discovered at startup
 *   through small `key=value` descriptor files
 * - Create, read, update and delete words and translations
 * - Export a single word with its translations into a separate file
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `dictionary`: Storage of dictionaries:
 *   - `dictionary::store`: Word to translations mapping of one dictionary
 *   - `dictionary::registry`: Discovery and routing by type name
 *   - `dictionary::export`: Single pair export
 * - `file_utils`: File system operations
 * - `app_controller`: Command execution for the CLI
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod dictionary;
pub mod errors;
pub mod file_utils;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Controller, DictionaryCommand};
pub use dictionary::{Entries, LanguagePair, Registry, WordStore};
pub use errors::{DictionaryError, DictionaryResult};
