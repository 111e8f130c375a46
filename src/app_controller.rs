use anyhow::{Context, Result};
use log::{debug, info, warn};

use crate::app_config::Config;
use crate::dictionary::{Entries, Registry};

// @module: Application controller for dictionary commands

/// One request from the command line, already parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryCommand {
    List,
    Create { type_spec: String },
    Show { dictionary: String },
    Get { dictionary: String, word: String },
    Search { dictionary: String, word: String },
    Add { dictionary: String, word: String, translations: Vec<String> },
    Append { dictionary: String, word: String, translation: String },
    Rename { dictionary: String, old_word: String, new_word: String },
    Replace {
        dictionary: String,
        word: String,
        old_translation: String,
        new_translation: String,
    },
    Remove { dictionary: String, word: String },
    RemoveTranslation { dictionary: String, word: String, translation: String },
    Export { dictionary: String, word: String, name: String },
}

/// Main application controller: owns the registry and renders results as text
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Dictionaries found at startup
    registry: Registry,
}

impl Controller {
    // @method: Create a new controller, discovering dictionaries under the configured root
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;

        let registry = Registry::discover(&config)
            .with_context(|| format!("Failed to load dictionaries from {:?}", config.cache_dir()))?;

        debug!("Controller ready with {} dictionaries", registry.list_types().len());
        Ok(Self { config, registry })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Execute a command and return the text to show the user
    pub fn run(&mut self, command: DictionaryCommand) -> Result<String> {
        let output = match command {
            DictionaryCommand::List => {
                let types = self.registry.list_types();
                if types.is_empty() {
                    "No dictionaries yet. Create one with 'create From-To'.".to_string()
                } else {
                    types
                        .iter()
                        .enumerate()
                        .map(|(i, name)| format!("{}. {}", i + 1, name))
                        .collect::<Vec<_>>()
                        .join("\n")
                }
            }
            DictionaryCommand::Create { type_spec } => {
                let store = self.registry.create(&type_spec)?;
                let name = store.type_name();
                info!("Dictionary {} created", name);
                format!("Created dictionary {}", name)
            }
            DictionaryCommand::Show { dictionary } => {
                let entries = self.registry.entries(&dictionary)?;
                if entries.is_empty() {
                    format!("{} is empty", dictionary)
                } else {
                    render_entries(&entries)
                }
            }
            DictionaryCommand::Get { dictionary, word } => {
                let translations = self.registry.translations(&dictionary, &word)?;
                render_pair(&word, &translations)
            }
            DictionaryCommand::Search { dictionary, word } => {
                match self.registry.search(&dictionary, &word)? {
                    Some(translations) => render_pair(&word, &translations),
                    None => {
                        warn!("Nothing was found in {} for '{}'", dictionary, word);
                        "Nothing was found in dictionary".to_string()
                    }
                }
            }
            DictionaryCommand::Add { dictionary, word, translations } => {
                self.registry.add_pair(&dictionary, &word, translations)?;
                format!("Saved '{}' in {}", word, dictionary)
            }
            DictionaryCommand::Append { dictionary, word, translation } => {
                self.registry.add_translation(&dictionary, &word, &translation)?;
                format!("Added '{}' to '{}'", translation, word)
            }
            DictionaryCommand::Rename { dictionary, old_word, new_word } => {
                self.registry.change_key(&dictionary, &old_word, &new_word)?;
                format!("Renamed '{}' to '{}'", old_word, new_word)
            }
            DictionaryCommand::Replace { dictionary, word, old_translation, new_translation } => {
                self.registry
                    .change_translation(&dictionary, &word, &old_translation, &new_translation)?;
                format!(
                    "Replaced '{}' with '{}' for '{}'",
                    old_translation, new_translation, word
                )
            }
            DictionaryCommand::Remove { dictionary, word } => {
                self.registry.delete_pair(&dictionary, &word)?;
                format!("Deleted '{}' from {}", word, dictionary)
            }
            DictionaryCommand::RemoveTranslation { dictionary, word, translation } => {
                self.registry.delete_translation(&dictionary, &word, &translation)?;
                format!("Deleted '{}' from '{}'", translation, word)
            }
            DictionaryCommand::Export { dictionary, word, name } => {
                let path = self.registry.export_pair(&dictionary, &word, &name)?;
                format!("Exported '{}' to {}", word, path.display())
            }
        };

        Ok(output)
    }
}

/// `word: first, second`
pub fn render_pair(word: &str, translations: &[String]) -> String {
    format!("{}: {}", word, translations.join(", "))
}

fn render_entries(entries: &Entries) -> String {
    entries
        .iter()
        .map(|(word, translations)| render_pair(word, translations))
        .collect::<Vec<_>>()
        .join("\n")
}
