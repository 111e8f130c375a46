use anyhow::{Context, Result};
use log::trace;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use walkdir::WalkDir;

use crate::errors::{DictionaryError, DictionaryResult};

// @module: File and directory utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> DictionaryResult<()> {
        let path = path.as_ref();
        if !Self::dir_exists(path) {
            fs::create_dir_all(path).map_err(|e| DictionaryError::io(path, e))?;
        }
        Ok(())
    }

    /// Find files with a specific extension directly inside a directory,
    /// sorted by file name
    pub fn find_files<P: AsRef<Path>>(dir: P, extension: &str) -> DictionaryResult<Vec<PathBuf>> {
        let dir = dir.as_ref();
        let extension = extension.trim_start_matches('.');
        let mut result = Vec::new();

        let walker = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();

        for entry in walker {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(dir).to_path_buf();
                DictionaryError::io(path, e.into())
            })?;
            let path = entry.path();

            if path.is_file() {
                if let Some(ext) = path.extension() {
                    if ext.to_string_lossy().eq_ignore_ascii_case(extension) {
                        result.push(path.to_path_buf());
                    }
                }
            }
        }

        Ok(result)
    }

    /// Read a file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {:?}", path.as_ref()))
    }

    /// Write a string to a file
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            Self::ensure_dir(parent)?;
        }

        fs::write(&path, content)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Replace a file's content through a temporary file in the same
    /// directory, so readers never observe a partial write
    pub fn write_atomic<P: AsRef<Path>>(path: P, content: &str) -> DictionaryResult<()> {
        let path = path.as_ref();
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        Self::ensure_dir(parent)?;

        let mut temp = NamedTempFile::new_in(parent).map_err(|e| DictionaryError::io(parent, e))?;
        temp.write_all(content.as_bytes())
            .map_err(|e| DictionaryError::io(temp.path(), e))?;
        temp.as_file()
            .sync_all()
            .map_err(|e| DictionaryError::io(temp.path(), e))?;
        temp.persist(path)
            .map_err(|e| DictionaryError::io(path, e.error))?;

        trace!("Wrote {} bytes to {:?}", content.len(), path);
        Ok(())
    }
}
