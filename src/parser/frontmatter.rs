// file: src/parser/frontmatter.rs
// description: YAML frontmatter extraction from markdown
// reference: https://docs.rs/yaml-rust

use crate::error::{RegistryError, Result};
use std::collections::BTreeMap;
use tracing::debug;
use yaml_rust::{Yaml, YamlLoader};

pub struct FrontmatterParser;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontmatter {
    pub fields: BTreeMap<String, String>,
}

impl FrontmatterParser {
    pub fn new() -> Self {
        Self
    }

    /// Splits a leading `---` delimited YAML block off `content`. Returns
    /// `None` when the text does not open with a front matter fence, the
    /// fence is never closed, or the block is not a YAML mapping (a leading
    /// `---` thematic break).
    pub fn extract<'a>(
        &self,
        source_path: &str,
        content: &'a str,
    ) -> Result<Option<(Frontmatter, &'a str)>> {
        let Some(rest) = strip_fence_line(content) else {
            return Ok(None);
        };

        let mut offset = 0;
        let mut closing = None;
        for line in rest.split_inclusive('\n') {
            let bare = line.trim_end_matches(['\r', '\n']);
            if bare == "---" || bare == "..." {
                closing = Some((offset, offset + line.len()));
                break;
            }
            offset += line.len();
        }

        let Some((yaml_end, body_start)) = closing else {
            return Ok(None);
        };

        let yaml_content = &rest[..yaml_end];
        let remaining_content = &rest[body_start..];

        let docs = YamlLoader::load_from_str(yaml_content).map_err(|e| {
            RegistryError::parse(source_path, format!("front matter YAML error: {}", e))
        })?;

        let mut fields = BTreeMap::new();

        if let Some(Yaml::Hash(hash)) = docs.first() {
            for (key, value) in hash {
                let Some(key) = key.as_str() else {
                    continue;
                };
                if let Some(text) = scalar_text(value) {
                    fields.insert(key.to_string(), text);
                }
            }
        } else if docs.first().is_some_and(|doc| !doc.is_null()) {
            debug!(
                "{}: leading --- block is not a YAML mapping, reading it as markdown",
                source_path
            );
            return Ok(None);
        }

        Ok(Some((Frontmatter { fields }, remaining_content)))
    }

    pub fn get_field<'a>(&self, frontmatter: &'a Frontmatter, key: &str) -> Option<&'a str> {
        frontmatter.fields.get(key).map(String::as_str)
    }
}

impl Default for FrontmatterParser {
    fn default() -> Self {
        Self::new()
    }
}

fn strip_fence_line(content: &str) -> Option<&str> {
    let rest = content.strip_prefix("---")?;
    rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n'))
}

fn scalar_text(value: &Yaml) -> Option<String> {
    match value {
        Yaml::String(s) | Yaml::Real(s) => Some(s.clone()),
        Yaml::Integer(i) => Some(i.to_string()),
        Yaml::Boolean(b) => Some(b.to_string()),
        _ => None,
    }
}
