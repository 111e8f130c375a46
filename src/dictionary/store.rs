/*!
 * Word store: one dictionary's mapping from a word to its translations.
 *
 * The store keeps no entries in memory. Every operation reads the whole
 * data file, and every mutation rewrites it. A failed check happens before
 * the write, so an error always leaves the file as it was.
 */

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use super::descriptor::Descriptor;
use super::language_pair::LanguagePair;
use crate::app_config::EmptyListPolicy;
use crate::errors::{DictionaryError, DictionaryResult};
use crate::file_utils::FileManager;

/// Word to ordered translations, as persisted in data and export files
pub type Entries = BTreeMap<String, Vec<String>>;

/// Read a JSON mapping file. `null` and blank files count as empty
pub fn read_entries(path: &Path) -> DictionaryResult<Entries> {
    let content = fs::read_to_string(path).map_err(|e| DictionaryError::from_read(path, e))?;

    if content.trim().is_empty() {
        return Ok(Entries::new());
    }

    let entries: Option<Entries> = serde_json::from_str(&content)
        .map_err(|e| DictionaryError::corrupt(path, e.to_string()))?;
    Ok(entries.unwrap_or_default())
}

/// Rewrite a JSON mapping file, pretty-printed
pub fn write_entries(path: &Path, entries: &Entries) -> DictionaryResult<()> {
    let mut json = serde_json::to_string_pretty(entries)?;
    json.push('\n');
    FileManager::write_atomic(path, &json)
}

/// A persisted dictionary for one language pair
#[derive(Debug, Clone)]
pub struct WordStore {
    pair: LanguagePair,
    data_path: PathBuf,
    empty_list_policy: EmptyListPolicy,
}

impl WordStore {
    /// Create the descriptor and an empty data file for a new pair in `cache_dir`
    pub fn create(
        cache_dir: &Path,
        pair: LanguagePair,
        empty_list_policy: EmptyListPolicy,
    ) -> DictionaryResult<Self> {
        let descriptor_path = Descriptor::path_for(cache_dir, &pair);
        let data_path = Descriptor::data_path_for(cache_dir, &pair);

        for path in [&descriptor_path, &data_path] {
            if path.exists() {
                return Err(DictionaryError::AlreadyExists(path.clone()));
            }
        }

        FileManager::ensure_dir(cache_dir)?;

        // Descriptors record an absolute data path
        let cache_dir =
            fs::canonicalize(cache_dir).map_err(|e| DictionaryError::io(cache_dir, e))?;
        let data_path = Descriptor::data_path_for(&cache_dir, &pair);

        write_entries(&data_path, &Entries::new())?;
        let saved = Descriptor::new(data_path.clone(), pair.clone()).save(&descriptor_path);
        remove_on_error(saved, &data_path)?;

        info!("Created dictionary {} at {:?}", pair, data_path);

        Ok(Self {
            pair,
            data_path,
            empty_list_policy,
        })
    }

    /// Load a store from a descriptor file written by `create`
    pub fn open(
        descriptor_path: &Path,
        empty_list_policy: EmptyListPolicy,
    ) -> DictionaryResult<Self> {
        let descriptor = Descriptor::load(descriptor_path)?;

        // Parse once up front so a broken data file shows at startup
        read_entries(&descriptor.data_path)?;

        debug!("Opened dictionary {} from {:?}", descriptor.pair, descriptor_path);

        Ok(Self {
            pair: descriptor.pair,
            data_path: descriptor.data_path,
            empty_list_policy,
        })
    }

    pub fn pair(&self) -> &LanguagePair {
        &self.pair
    }

    /// Registry key of this store (`From-To`)
    pub fn type_name(&self) -> String {
        self.pair.type_name()
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    /// Whole mapping as currently persisted
    pub fn entries(&self) -> DictionaryResult<Entries> {
        read_entries(&self.data_path)
    }

    /// Number of words in the dictionary
    pub fn len(&self) -> DictionaryResult<usize> {
        Ok(self.entries()?.len())
    }

    pub fn is_empty(&self) -> DictionaryResult<bool> {
        Ok(self.entries()?.is_empty())
    }

    /// Translations of `key`, in insertion order
    pub fn get(&self, key: &str) -> DictionaryResult<Vec<String>> {
        let mut entries = self.entries()?;
        entries
            .remove(key)
            .ok_or_else(|| DictionaryError::KeyNotFound(key.to_string()))
    }

    /// Set `key` to exactly `translations`, replacing any previous list
    pub fn put_new(&self, key: &str, translations: Vec<String>) -> DictionaryResult<()> {
        if translations.is_empty() {
            return Err(DictionaryError::EmptyTranslations(key.to_string()));
        }

        self.modify(|entries| {
            entries.insert(key.to_string(), translations);
            Ok(())
        })?;
        debug!("{}: stored '{}'", self.pair, key);
        Ok(())
    }

    /// Add one translation at the end of an existing word's list
    pub fn append_translation(&self, key: &str, translation: &str) -> DictionaryResult<()> {
        self.modify(|entries| {
            let list = lookup_mut(entries, key)?;
            list.push(translation.to_string());
            Ok(())
        })?;
        debug!("{}: appended '{}' to '{}'", self.pair, translation, key);
        Ok(())
    }

    /// Move `old_key`'s list to `new_key`, overwriting whatever was there
    pub fn rename_key(&self, old_key: &str, new_key: &str) -> DictionaryResult<()> {
        self.modify(|entries| {
            let list = entries
                .remove(old_key)
                .ok_or_else(|| DictionaryError::KeyNotFound(old_key.to_string()))?;
            entries.insert(new_key.to_string(), list);
            Ok(())
        })?;
        debug!("{}: renamed '{}' to '{}'", self.pair, old_key, new_key);
        Ok(())
    }

    /// Replace the first `old_value` in `key`'s list, keeping its position
    pub fn replace_translation(
        &self,
        key: &str,
        old_value: &str,
        new_value: &str,
    ) -> DictionaryResult<()> {
        self.modify(|entries| {
            let list = lookup_mut(entries, key)?;
            let index = position_of(list, key, old_value)?;
            list[index] = new_value.to_string();
            Ok(())
        })?;
        debug!("{}: '{}' now has '{}' instead of '{}'", self.pair, key, new_value, old_value);
        Ok(())
    }

    /// Remove a word and all its translations
    pub fn delete_key(&self, key: &str) -> DictionaryResult<()> {
        self.modify(|entries| {
            entries
                .remove(key)
                .map(|_| ())
                .ok_or_else(|| DictionaryError::KeyNotFound(key.to_string()))
        })?;
        debug!("{}: deleted '{}'", self.pair, key);
        Ok(())
    }

    /// Remove the first occurrence of `value` from `key`'s list.
    ///
    /// If that empties the list, the configured `EmptyListPolicy` decides
    /// whether the word goes too.
    pub fn delete_translation(&self, key: &str, value: &str) -> DictionaryResult<()> {
        let policy = self.empty_list_policy;
        self.modify(|entries| {
            let list = lookup_mut(entries, key)?;
            let index = position_of(list, key, value)?;
            list.remove(index);

            if list.is_empty() && policy == EmptyListPolicy::RemoveKey {
                entries.remove(key);
            }
            Ok(())
        })?;
        debug!("{}: removed '{}' from '{}'", self.pair, value, key);
        Ok(())
    }

    // Read, change in memory, rewrite. Nothing is written if `change` fails
    fn modify<T>(
        &self,
        change: impl FnOnce(&mut Entries) -> DictionaryResult<T>,
    ) -> DictionaryResult<T> {
        let mut entries = self.entries()?;
        let result = change(&mut entries)?;
        write_entries(&self.data_path, &entries)?;
        Ok(result)
    }
}

// A data file without its descriptor would block every later `create` of the pair
fn remove_on_error<T>(result: DictionaryResult<T>, created: &Path) -> DictionaryResult<T> {
    if result.is_err() {
        if let Err(e) = fs::remove_file(created) {
            warn!("Failed to remove {:?} after an aborted create: {}", created, e);
        }
    }
    result
}

fn lookup_mut<'a>(entries: &'a mut Entries, key: &str) -> DictionaryResult<&'a mut Vec<String>> {
    entries
        .get_mut(key)
        .ok_or_else(|| DictionaryError::KeyNotFound(key.to_string()))
}

fn position_of(list: &[String], key: &str, value: &str) -> DictionaryResult<usize> {
    list.iter()
        .position(|t| t == value)
        .ok_or_else(|| DictionaryError::TranslationNotFound {
            key: key.to_string(),
            translation: value.to_string(),
        })
}
