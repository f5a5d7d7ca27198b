// file: src/registry/source.rs
// description: byte sources the registry can load documents from
// reference: std::fs::read_to_string with path-annotated errors

use crate::error::{RegistryError, Result};
use crate::repository::ScannedSource;
use std::fs;
use std::path::{Path, PathBuf};

/// Anything that can hand the registry a document's raw text together with
/// an identifier of where it came from.
pub trait DocumentSource {
    fn source_path(&self) -> String;

    fn read_text(&self) -> Result<String>;
}

impl<T: DocumentSource + ?Sized> DocumentSource for &T {
    fn source_path(&self) -> String {
        (**self).source_path()
    }

    fn read_text(&self) -> Result<String> {
        (**self).read_text()
    }
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| RegistryError::FileOperation {
        path: path.to_path_buf(),
        source,
    })
}

impl DocumentSource for Path {
    fn source_path(&self) -> String {
        self.display().to_string()
    }

    fn read_text(&self) -> Result<String> {
        read_file(self)
    }
}

impl DocumentSource for PathBuf {
    fn source_path(&self) -> String {
        self.as_path().source_path()
    }

    fn read_text(&self) -> Result<String> {
        read_file(self)
    }
}

impl DocumentSource for ScannedSource {
    fn source_path(&self) -> String {
        self.relative_path.clone()
    }

    fn read_text(&self) -> Result<String> {
        read_file(&self.path)
    }
}

/// In-memory text, for callers whose loader already holds the content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineSource {
    source_path: String,
    text: String,
}

impl InlineSource {
    pub fn new(source_path: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source_path: source_path.into(),
            text: text.into(),
        }
    }
}

impl DocumentSource for InlineSource {
    fn source_path(&self) -> String {
        self.source_path.clone()
    }

    fn read_text(&self) -> Result<String> {
        Ok(self.text.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_path_source_reads_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("5.6.md");
        fs::write(&path, "# TypeScript 5.6").unwrap();

        assert_eq!(path.read_text().unwrap(), "# TypeScript 5.6");
        assert_eq!(path.source_path(), path.display().to_string());
    }

    #[test]
    fn test_missing_file_names_path() {
        let path = PathBuf::from("/nonexistent/5.6.md");
        match path.read_text() {
            Err(RegistryError::FileOperation { path: failed, .. }) => {
                assert_eq!(failed, path);
            }
            other => panic!("expected file operation error, got {other:?}"),
        }
    }

    #[test]
    fn test_inline_source_by_reference() {
        let source = InlineSource::new("inline/5.7", "# TypeScript 5.7");
        let by_ref: &InlineSource = &source;

        assert_eq!(by_ref.source_path(), "inline/5.7");
        assert_eq!(by_ref.read_text().unwrap(), "# TypeScript 5.7");
    }
}
