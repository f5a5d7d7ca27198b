// file: src/models/document.rs
// description: immutable release-notes document with content hash and outline helpers
// reference: internal data structures

use crate::models::Version;
use crate::parser::markdown::{CodeSample, Heading, MarkdownParser};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub version: Version,
    pub title: String,
    pub body: String,
    pub source_path: String,
    pub content_hash: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
}

impl Document {
    /// `raw` is the complete source text; the hash is taken over it so that
    /// re-saved but otherwise identical files keep their identity.
    pub fn new(
        version: Version,
        title: String,
        body: String,
        source_path: String,
        raw: &str,
    ) -> Self {
        Self {
            version,
            title,
            body,
            source_path,
            content_hash: Self::compute_hash(raw),
            metadata: BTreeMap::new(),
        }
    }

    pub fn with_metadata(mut self, metadata: BTreeMap<String, String>) -> Self {
        self.metadata = metadata;
        self
    }

    fn compute_hash(content: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(content.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    pub fn outline(&self) -> Vec<Heading> {
        MarkdownParser::new().outline(&self.body)
    }

    pub fn section(&self, heading: &str) -> Option<String> {
        MarkdownParser::new().extract_section(&self.body, heading)
    }

    pub fn code_samples(&self) -> Vec<CodeSample> {
        MarkdownParser::new().code_samples(&self.body)
    }
}
