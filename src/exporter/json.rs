// file: src/exporter/json.rs
// description: json export of a published version index

use crate::error::{RegistryError, Result};
use crate::index::VersionIndex;
use crate::models::{Document, Version};
use chrono::Utc;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct JsonExporter {
    output_dir: PathBuf,
}

#[derive(Debug, Serialize)]
pub struct ExportManifest {
    pub exported_at: String,
    pub generation: u64,
    pub total_documents: usize,
    pub versions: Vec<Version>,
    pub files: Vec<String>,
}

impl JsonExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir)?;
        Ok(Self { output_dir })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Writes one `<version>.json` per document, ascending, then `manifest.json`.
    pub fn export(&self, index: &VersionIndex, pretty: bool) -> Result<ExportManifest> {
        info!("Starting JSON export to {}", self.output_dir.display());

        let mut files = Vec::with_capacity(index.len());
        for document in index.iter() {
            let file_name = format!("{}.json", document.version);
            self.write_json(&file_name, document.as_ref(), pretty)?;
            debug!("Exported {} to {}", document.version, file_name);
            files.push(file_name);
        }

        let manifest = ExportManifest {
            exported_at: Utc::now().to_rfc3339(),
            generation: index.generation(),
            total_documents: files.len(),
            versions: index.versions(),
            files,
        };

        self.write_json("manifest.json", &manifest, pretty)?;

        info!(
            "Export complete: {} documents exported",
            manifest.total_documents
        );
        Ok(manifest)
    }

    pub fn export_single(&self, document: &Document, pretty: bool) -> Result<PathBuf> {
        let file_name = format!("{}.json", document.version);
        self.write_json(&file_name, document, pretty)?;
        Ok(self.output_dir.join(file_name))
    }

    fn write_json<T: Serialize + ?Sized>(
        &self,
        file_name: &str,
        value: &T,
        pretty: bool,
    ) -> Result<()> {
        let json = if pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };

        let path = self.output_dir.join(file_name);
        fs::write(&path, json).map_err(|source| RegistryError::FileOperation { path, source })
    }
}
