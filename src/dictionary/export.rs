use std::path::{Path, PathBuf};

use log::info;

use super::descriptor::DATA_EXTENSION;
use super::store::{read_entries, write_entries, Entries, WordStore};
use crate::app_config::ExportMode;
use crate::errors::{DictionaryError, DictionaryResult};
use crate::file_utils::FileManager;

/// Path of the export file called `name` inside `export_dir`
pub fn export_path(export_dir: &Path, name: &str) -> DictionaryResult<PathBuf> {
    let name = name.trim();
    if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
        return Err(DictionaryError::InvalidFormat(format!(
            "'{}' is not a valid export name",
            name
        )));
    }
    Ok(export_dir.join(format!("{}.{}", name, DATA_EXTENSION)))
}

/// Copy one word and its translations from `store` into `<export_dir>/<name>.json`.
///
/// The source dictionary is only read. With `ExportMode::Reset` the
/// destination ends up holding just this pair; with `ExportMode::Merge` the
/// pair is added to whatever the destination already had.
pub fn export_pair(
    store: &WordStore,
    key: &str,
    export_dir: &Path,
    name: &str,
    mode: ExportMode,
) -> DictionaryResult<PathBuf> {
    let translations = store.get(key)?;
    let destination = export_path(export_dir, name)?;

    let mut exported = match mode {
        ExportMode::Merge if destination.exists() => read_entries(&destination)?,
        _ => Entries::new(),
    };
    exported.insert(key.to_string(), translations);

    FileManager::ensure_dir(export_dir)?;
    write_entries(&destination, &exported)?;

    info!(
        "Exported '{}' from {} to {:?} ({} mode)",
        key,
        store.pair(),
        destination,
        mode
    );
    Ok(destination)
}
