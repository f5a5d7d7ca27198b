// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod exporter;
pub mod index;
pub mod models;
pub mod parser;
pub mod registry;
pub mod repository;
pub mod utils;

pub use config::{Config, ExportConfig, SourceConfig};
pub use error::{RegistryError, Result};
pub use exporter::{ExportManifest, JsonExporter};
pub use index::VersionIndex;
pub use models::{Document, Version};
pub use parser::{CodeSample, DocumentParser, Frontmatter, FrontmatterParser, Heading, MarkdownParser};
pub use registry::{DocumentSource, InlineSource, LoadReport, LoadStats, Registry, RegistryState};
pub use repository::{ScannedSource, SourceScanner};
pub use utils::{OperationTimer, Validator};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let _config = Config::default_config();
        let registry = Registry::new();
        let report = registry.load([InlineSource::new("5.6.md", "# TypeScript 5.6\n")]);
        assert!(report.is_clean());
        assert_eq!(registry.get("5.6").unwrap().version, Version::new(5, 6));
    }
}
