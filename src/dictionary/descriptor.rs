/*!
 * Dictionary descriptors.
 *
 * A descriptor is a small `key=value` text file sitting next to the data
 * file of a dictionary. Discovery scans for descriptors, so they are what
 * makes a dictionary visible at startup:
 *
 * ```text
 * jsonFilePath=/home/me/.local/share/vocabman/cache/English-French.json
 * type=English-French
 * ```
 */

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use super::language_pair::LanguagePair;
use crate::errors::{DictionaryError, DictionaryResult};
use crate::file_utils::FileManager;

/// File extension of descriptor files
pub const DESCRIPTOR_EXTENSION: &str = "cfg";

/// File extension of data and export files
pub const DATA_EXTENSION: &str = "json";

const DATA_PATH_FIELD: &str = "jsonFilePath";
const TYPE_FIELD: &str = "type";

/// Parsed contents of a descriptor file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    /// Location of the dictionary's data file
    pub data_path: PathBuf,
    /// Languages of the dictionary
    pub pair: LanguagePair,
}

impl Descriptor {
    pub fn new(data_path: PathBuf, pair: LanguagePair) -> Self {
        Self { data_path, pair }
    }

    /// Split every non-blank line on its first `=`
    pub fn parse_fields(content: &str) -> Result<HashMap<String, String>, String> {
        let mut fields = HashMap::new();

        for (number, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let (key, value) = line
                .split_once('=')
                .ok_or_else(|| format!("line {} has no '=': {}", number + 1, line))?;
            fields.insert(key.trim().to_string(), value.trim().to_string());
        }

        Ok(fields)
    }

    /// Parse descriptor text. `origin` names the file in error messages and
    /// anchors a relative `jsonFilePath`
    pub fn parse(content: &str, origin: &Path) -> DictionaryResult<Self> {
        let fields =
            Self::parse_fields(content).map_err(|reason| DictionaryError::corrupt(origin, reason))?;

        let missing =
            |field: &str| DictionaryError::corrupt(origin, format!("missing '{}'", field));

        let raw_path = fields
            .get(DATA_PATH_FIELD)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| missing(DATA_PATH_FIELD))?;
        let raw_type = fields
            .get(TYPE_FIELD)
            .ok_or_else(|| missing(TYPE_FIELD))?;

        let pair: LanguagePair = raw_type.parse().map_err(|_| {
            DictionaryError::corrupt(origin, format!("invalid type '{}'", raw_type))
        })?;

        let mut data_path = PathBuf::from(raw_path);
        if data_path.is_relative() {
            if let Some(parent) = origin.parent() {
                data_path = parent.join(data_path);
            }
        }

        Ok(Self { data_path, pair })
    }

    /// Read and parse a descriptor file
    pub fn load(path: &Path) -> DictionaryResult<Self> {
        debug!("Reading descriptor {:?}", path);

        let content = fs::read_to_string(path).map_err(|e| DictionaryError::from_read(path, e))?;

        Self::parse(&content, path)
    }

    /// Text form written to disk
    pub fn render(&self) -> String {
        format!(
            "{}={}\n{}={}\n",
            DATA_PATH_FIELD,
            self.data_path.display(),
            TYPE_FIELD,
            self.pair.type_name()
        )
    }

    /// Write the descriptor to `path`, replacing any previous file
    pub fn save(&self, path: &Path) -> DictionaryResult<()> {
        FileManager::write_atomic(path, &self.render())
    }

    /// Descriptor path for a pair inside `cache_dir`
    pub fn path_for(cache_dir: &Path, pair: &LanguagePair) -> PathBuf {
        cache_dir.join(format!("{}.{}", pair.type_name(), DESCRIPTOR_EXTENSION))
    }

    /// Data file path for a pair inside `cache_dir`
    pub fn data_path_for(cache_dir: &Path, pair: &LanguagePair) -> PathBuf {
        cache_dir.join(format!("{}.{}", pair.type_name(), DATA_EXTENSION))
    }
}
