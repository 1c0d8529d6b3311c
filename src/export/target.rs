use std::path::{Path, PathBuf};

use crate::error::{ExportError, Result};

/// Where an export is written: a base name, optionally inside a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportTarget {
    directory: Option<PathBuf>,
    base_name: String,
}

impl ExportTarget {
    /// A target relative to the current working directory.
    #[must_use]
    pub fn new(base_name: impl Into<String>) -> Self {
        Self {
            directory: None,
            base_name: base_name.into(),
        }
    }

    /// A target inside `directory`.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::InvalidTarget`] if `directory` is not an
    /// existing directory.
    pub fn in_directory(directory: impl AsRef<Path>, base_name: impl Into<String>) -> Result<Self> {
        let directory = directory.as_ref();
        if !directory.is_dir() {
            return Err(ExportError::InvalidTarget {
                path: directory.to_path_buf(),
            }
            .into());
        }
        Ok(Self {
            directory: Some(directory.to_path_buf()),
            base_name: base_name.into(),
        })
    }

    #[must_use]
    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    #[must_use]
    pub fn directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }

    /// Full file path with `extension` appended to the base name.
    #[must_use]
    pub fn path(&self, extension: &str) -> PathBuf {
        let file_name = format!("{}{extension}", self.base_name);
        match &self.directory {
            Some(dir) => dir.join(file_name),
            None => PathBuf::from(file_name),
        }
    }
}
