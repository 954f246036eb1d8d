use std::path::{Path, PathBuf};

use crate::{Declarations, Result};

/// A declarations file with both raw content and parsed declarations.
pub struct DeclarationsFile {
    path: PathBuf,
    content: String,
    declarations: Declarations,
}

impl DeclarationsFile {
    /// Open and parse a declarations file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let declarations = Declarations::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            declarations,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed declarations.
    pub fn declarations(&self) -> &Declarations {
        &self.declarations
    }

    /// Consume the file, returning the parsed declarations.
    pub fn into_declarations(self) -> Declarations {
        self.declarations
    }
}
