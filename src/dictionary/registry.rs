/*!
 * Dictionary registry.
 *
 * Indexes every known `WordStore` by its `From-To` type name and routes
 * operations to the right one. Built at startup by scanning the cache
 * directory for descriptors, and extended when a dictionary is created.
 */

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use log::{debug, info};

use super::descriptor::DESCRIPTOR_EXTENSION;
use super::export;
use super::language_pair::LanguagePair;
use super::store::{Entries, WordStore};
use crate::app_config::{Config, EmptyListPolicy, ExportMode};
use crate::errors::{DictionaryError, DictionaryResult};
use crate::file_utils::FileManager;

/// In-memory index from type name to dictionary
#[derive(Debug)]
pub struct Registry {
    cache_dir: PathBuf,
    export_dir: PathBuf,
    empty_list_policy: EmptyListPolicy,
    export_mode: ExportMode,
    /// Type names in registration order
    order: Vec<String>,
    stores: HashMap<String, WordStore>,
}

impl Registry {
    /// Empty registry over the directories named by `config`.
    /// Both directories are created if missing
    pub fn new(config: &Config) -> DictionaryResult<Self> {
        let cache_dir = config.cache_dir();
        let export_dir = config.export_dir();
        FileManager::ensure_dir(&cache_dir)?;
        FileManager::ensure_dir(&export_dir)?;

        Ok(Self {
            cache_dir,
            export_dir,
            empty_list_policy: config.empty_list_policy,
            export_mode: config.export_mode,
            order: Vec::new(),
            stores: HashMap::new(),
        })
    }

    /// Registry holding every dictionary persisted in the cache directory
    pub fn discover(config: &Config) -> DictionaryResult<Self> {
        let mut registry = Self::new(config)?;
        registry.load_descriptors()?;
        Ok(registry)
    }

    fn load_descriptors(&mut self) -> DictionaryResult<()> {
        let descriptors = FileManager::find_files(&self.cache_dir, DESCRIPTOR_EXTENSION)?;

        for path in descriptors {
            let store = WordStore::open(&path, self.empty_list_policy)?;
            self.register(store)?;
        }

        info!(
            "Found {} dictionar{} in {:?}",
            self.order.len(),
            if self.order.len() == 1 { "y" } else { "ies" },
            self.cache_dir
        );
        Ok(())
    }

    fn register(&mut self, store: WordStore) -> DictionaryResult<()> {
        let type_name = store.type_name();
        if self.stores.contains_key(&type_name) {
            return Err(DictionaryError::DuplicateType(type_name));
        }

        debug!("Registered dictionary {}", type_name);
        self.order.push(type_name.clone());
        self.stores.insert(type_name, store);
        Ok(())
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    pub fn export_dir(&self) -> &Path {
        &self.export_dir
    }

    /// Registered type names, in registration order
    pub fn list_types(&self) -> Vec<String> {
        self.order.clone()
    }

    /// Create and register a dictionary from a `From-To` type name
    pub fn create(&mut self, type_spec: &str) -> DictionaryResult<&WordStore> {
        let pair: LanguagePair = type_spec.parse()?;
        let type_name = pair.type_name();

        if self.stores.contains_key(&type_name) {
            return Err(DictionaryError::DuplicateType(type_name));
        }

        let store = WordStore::create(&self.cache_dir, pair, self.empty_list_policy)?;
        self.register(store)?;
        self.store(&type_name)
    }

    /// Dictionary registered under `type_name`
    pub fn store(&self, type_name: &str) -> DictionaryResult<&WordStore> {
        self.stores
            .get(type_name)
            .ok_or_else(|| DictionaryError::UnknownDictionary(type_name.to_string()))
    }

    /// Run `operation` against the dictionary registered under `type_name`
    pub fn route<T>(
        &self,
        type_name: &str,
        operation: impl FnOnce(&WordStore) -> DictionaryResult<T>,
    ) -> DictionaryResult<T> {
        operation(self.store(type_name)?)
    }

    pub fn translations(&self, type_name: &str, key: &str) -> DictionaryResult<Vec<String>> {
        self.route(type_name, |store| store.get(key))
    }

    /// Like `translations`, but a missing word yields `None`
    pub fn search(&self, type_name: &str, key: &str) -> DictionaryResult<Option<Vec<String>>> {
        match self.translations(type_name, key) {
            Ok(translations) => Ok(Some(translations)),
            Err(DictionaryError::KeyNotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub fn entries(&self, type_name: &str) -> DictionaryResult<Entries> {
        self.route(type_name, |store| store.entries())
    }

    pub fn add_pair(
        &self,
        type_name: &str,
        key: &str,
        translations: Vec<String>,
    ) -> DictionaryResult<()> {
        self.route(type_name, |store| store.put_new(key, translations))
    }

    pub fn add_translation(
        &self,
        type_name: &str,
        key: &str,
        translation: &str,
    ) -> DictionaryResult<()> {
        self.route(type_name, |store| store.append_translation(key, translation))
    }

    pub fn change_key(
        &self,
        type_name: &str,
        old_key: &str,
        new_key: &str,
    ) -> DictionaryResult<()> {
        self.route(type_name, |store| store.rename_key(old_key, new_key))
    }

    pub fn change_translation(
        &self,
        type_name: &str,
        key: &str,
        old_value: &str,
        new_value: &str,
    ) -> DictionaryResult<()> {
        self.route(type_name, |store| {
            store.replace_translation(key, old_value, new_value)
        })
    }

    pub fn delete_pair(&self, type_name: &str, key: &str) -> DictionaryResult<()> {
        self.route(type_name, |store| store.delete_key(key))
    }

    pub fn delete_translation(
        &self,
        type_name: &str,
        key: &str,
        value: &str,
    ) -> DictionaryResult<()> {
        self.route(type_name, |store| store.delete_translation(key, value))
    }

    /// Export one pair into `<export dir>/<name>.json`, returning the file written
    pub fn export_pair(&self, type_name: &str, key: &str, name: &str) -> DictionaryResult<PathBuf> {
        self.route(type_name, |store| {
            export::export_pair(store, key, &self.export_dir, name, self.export_mode)
        })
    }
}
