// file: src/utils/validation.rs
// description: path validation and text helpers
// reference: input validation patterns

use crate::error::{RegistryError, Result};
use std::path::Path;

pub struct Validator;

impl Validator {
    pub fn validate_directory(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(RegistryError::Validation(format!(
                "Directory does not exist: {}",
                path.display()
            )));
        }

        if !path.is_dir() {
            return Err(RegistryError::Validation(format!(
                "Path is not a directory: {}",
                path.display()
            )));
        }

        Ok(())
    }

    pub fn sanitize_file_path(path: &str) -> String {
        let mut sanitized = path.trim().replace('\\', "/");
        while sanitized.contains("//") {
            sanitized = sanitized.replace("//", "/");
        }
        sanitized
    }

    /// Truncates on a character boundary; localized titles are multi-byte.
    pub fn truncate_text(text: &str, max_chars: usize) -> String {
        match text.char_indices().nth(max_chars) {
            None => text.to_string(),
            Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        }
    }
}
