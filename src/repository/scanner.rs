// file: src/repository/scanner.rs
// description: Directory walking and release-notes file discovery with filtering
// reference: https://docs.rs/walkdir

use crate::config::SourceConfig;
use crate::error::Result;
use crate::utils::Validator;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

pub struct SourceScanner {
    config: SourceConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedSource {
    pub path: PathBuf,
    pub relative_path: String,
    pub size: u64,
}

impl SourceScanner {
    pub fn new(config: SourceConfig) -> Self {
        Self { config }
    }

    /// Release-notes files under `root`, sorted by relative path.
    pub fn scan_directory(&self, root: &Path) -> Result<Vec<ScannedSource>> {
        Validator::validate_directory(root)?;
        info!("Scanning directory: {}", root.display());
        let mut files = Vec::new();
        let max_size = (self.config.max_file_size_mb as u64) * 1024 * 1024;

        for entry in WalkDir::new(root).follow_links(self.config.follow_links) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!("Skipping unreadable entry under {}: {}", root.display(), err);
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let relative_path = Validator::sanitize_file_path(
                &path.strip_prefix(root).unwrap_or(path).to_string_lossy(),
            );

            if self.should_skip(&relative_path) {
                debug!("Skipping file: {}", path.display());
                continue;
            }

            if !self.has_document_extension(path) {
                debug!("Skipping non-document file: {}", path.display());
                continue;
            }

            let size = match entry.metadata() {
                Ok(metadata) => metadata.len(),
                Err(err) => {
                    warn!("Cannot stat {}: {}", path.display(), err);
                    continue;
                }
            };

            if size > max_size {
                debug!(
                    "Skipping large file ({} MB): {}",
                    size / 1024 / 1024,
                    path.display()
                );
                continue;
            }

            files.push(ScannedSource {
                path: path.to_path_buf(),
                relative_path,
                size,
            });
        }

        files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));

        info!("Found {} release-notes files", files.len());
        Ok(files)
    }

    fn has_document_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.config
                    .extensions
                    .iter()
                    .any(|allowed| allowed.eq_ignore_ascii_case(ext))
            })
    }

    fn should_skip(&self, relative_path: &str) -> bool {
        self.config.skip_patterns.iter().any(|pattern| {
            if let Some(suffix) = pattern.strip_prefix('*') {
                relative_path.ends_with(suffix)
            } else if let Some(dir) = pattern.strip_suffix("/*") {
                relative_path.starts_with(&format!("{}/", dir))
                    || relative_path.contains(&format!("/{}/", dir))
            } else {
                relative_path.contains(pattern.as_str())
            }
        })
    }
}
