// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{RegistryError, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub sources: SourceConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourceConfig {
    pub root: PathBuf,
    pub extensions: Vec<String>,
    #[serde(default)]
    pub skip_patterns: Vec<String>,
    pub max_file_size_mb: usize,
    #[serde(default)]
    pub follow_links: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    pub output_dir: PathBuf,
    #[serde(default)]
    pub pretty: bool,
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new("config/default.toml")));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("RELNOTES")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("sources.extensions")
                .with_list_parse_key("sources.skip_patterns")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| RegistryError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| RegistryError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            sources: SourceConfig {
                root: PathBuf::from("./release-notes"),
                extensions: vec!["md".to_string(), "markdown".to_string()],
                skip_patterns: vec![".git/*".to_string(), "*.draft.md".to_string()],
                max_file_size_mb: 10,
                follow_links: false,
            },
            export: ExportConfig {
                output_dir: PathBuf::from("./exports"),
                pretty: true,
            },
        }
    }

    fn validate(&self) -> Result<()> {
        if self.sources.extensions.is_empty() {
            return Err(RegistryError::Config(
                "sources.extensions must list at least one extension".to_string(),
            ));
        }

        if self.sources.max_file_size_mb == 0 {
            return Err(RegistryError::Config(
                "max_file_size_mb must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
