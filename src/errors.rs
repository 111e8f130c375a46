/*!
 * Error types for the vocabman library.
 *
 * Every dictionary, registry and export operation fails with a
 * `DictionaryError`, so callers can tell the error kinds apart without
 * inspecting messages. The command-line layer wraps these in `anyhow`.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when working with dictionaries and their files
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// The word is not a key of the dictionary
    #[error("Key not found: {0}")]
    KeyNotFound(String),

    /// The word exists but the translation is not in its list
    #[error("Translation '{translation}' not found for key '{key}'")]
    TranslationNotFound {
        /// Word whose list was searched
        key: String,
        /// Translation that was looked for
        translation: String,
    },

    /// No dictionary is registered under this type name
    #[error("Unknown dictionary: {0}")]
    UnknownDictionary(String),

    /// User-supplied input, such as a `From-To` type name, is malformed
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// A descriptor or data file exists but cannot be understood
    #[error("Corrupt dictionary file {path:?}: {reason}")]
    ConfigCorrupt {
        /// Offending file
        path: PathBuf,
        /// What is wrong with it
        reason: String,
    },

    /// A dictionary with this type name is already registered
    #[error("Dictionary already exists: {0}")]
    DuplicateType(String),

    /// Backing storage for a new dictionary is already on disk
    #[error("Storage already exists: {0:?}")]
    AlreadyExists(PathBuf),

    /// A descriptor or the data file it points to is missing
    #[error("Storage not found: {0:?}")]
    NotFound(PathBuf),

    /// A new word was given no translations
    #[error("Key '{0}' needs at least one translation")]
    EmptyTranslations(String),

    /// Underlying storage is unavailable or unwritable
    #[error("I/O failure on {path:?}: {source}")]
    Io {
        /// File or directory being accessed
        path: PathBuf,
        /// Original error
        #[source]
        source: std::io::Error,
    },

    /// A mapping could not be encoded as JSON
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DictionaryError {
    /// Wrap an I/O error together with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Classify a failed read of a descriptor or data file
    pub fn from_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound(path),
            std::io::ErrorKind::InvalidData => Self::corrupt(path, "not valid UTF-8 text"),
            _ => Self::Io { path, source },
        }
    }

    /// Build a `ConfigCorrupt` error for the given file
    pub fn corrupt(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::ConfigCorrupt {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the dictionary modules
pub type DictionaryResult<T> = std::result::Result<T, DictionaryError>;
