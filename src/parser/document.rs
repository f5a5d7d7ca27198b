// file: src/parser/document.rs
// description: extracts front matter, level-1 heading, version token and body from raw text
// reference: https://docs.rs/pulldown-cmark

use crate::error::{RegistryError, Result};
use crate::models::{Document, Version};
use crate::parser::frontmatter::FrontmatterParser;
use crate::parser::patterns::VERSION_TOKEN;
use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};
use tracing::trace;

/// Turns raw release-notes text into a [`Document`]. Stateless; one parser can
/// be shared by every load.
pub struct DocumentParser {
    frontmatter: FrontmatterParser,
}

struct TitleHeading {
    title: String,
    body_start: usize,
}

impl DocumentParser {
    pub fn new() -> Self {
        Self {
            frontmatter: FrontmatterParser::new(),
        }
    }

    pub fn parse(&self, source_path: &str, text: &str) -> Result<Document> {
        let content = text.strip_prefix('\u{feff}').unwrap_or(text);

        if content.trim().is_empty() {
            return Err(RegistryError::parse(source_path, "document is empty"));
        }

        let (metadata, markdown) = match self.frontmatter.extract(source_path, content)? {
            Some((frontmatter, rest)) => (frontmatter.fields, rest),
            None => (Default::default(), content),
        };

        let heading = find_heading(markdown)
            .ok_or_else(|| RegistryError::parse(source_path, "no level-1 heading found"))?;

        let title = heading.title.trim().to_string();
        if title.is_empty() {
            return Err(RegistryError::parse(source_path, "level-1 heading has no title"));
        }

        let version = extract_version(&title).ok_or_else(|| {
            RegistryError::parse(
                source_path,
                format!("no major.minor version token in heading {:?}", title),
            )
        })?;

        trace!("Parsed {} as version {} ({})", source_path, version, title);

        let body = markdown[heading.body_start..].to_string();

        Ok(Document::new(version, title, body, source_path.to_string(), text).with_metadata(metadata))
    }
}

impl Default for DocumentParser {
    fn default() -> Self {
        Self::new()
    }
}

/// First level-1 heading as CommonMark sees it, so headings inside code
/// blocks and HTML blocks never qualify.
fn find_heading(markdown: &str) -> Option<TitleHeading> {
    let mut current: Option<String> = None;

    for (event, range) in Parser::new(markdown).into_offset_iter() {
        match event {
            Event::Start(Tag::Heading {
                level: HeadingLevel::H1,
                ..
            }) => {
                current = Some(String::new());
            }
            Event::End(TagEnd::Heading(HeadingLevel::H1)) => {
                let title = current.take()?;
                return Some(TitleHeading {
                    title,
                    body_start: line_end_after(markdown, range.end),
                });
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some(ref mut title) = current {
                    title.push_str(&text);
                }
            }
            _ => {}
        }
    }

    None
}

/// Start of the line following the heading; the body never begins mid-line.
fn line_end_after(markdown: &str, heading_end: usize) -> usize {
    if heading_end == 0 || markdown[..heading_end].ends_with('\n') {
        return heading_end;
    }
    markdown[heading_end..]
        .find('\n')
        .map_or(markdown.len(), |idx| heading_end + idx + 1)
}

fn extract_version(title: &str) -> Option<Version> {
    let caps = VERSION_TOKEN.captures(title)?;
    Version::from_components(caps.get(1)?.as_str(), caps.get(2)?.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_release_notes() {
        let parser = DocumentParser::new();
        let text = "# TypeScript 5.6\n\n## Disallowed Nullish and Truthy Checks\n\nBody text.\n";

        let doc = parser.parse("ko/5.6.md", text).unwrap();
        assert_eq!(doc.version, Version::new(5, 6));
        assert_eq!(doc.title, "TypeScript 5.6");
        assert_eq!(doc.source_path, "ko/5.6.md");
        assert_eq!(
            doc.body,
            "\n## Disallowed Nullish and Truthy Checks\n\nBody text.\n"
        );
    }

    #[test]
    fn test_heading_after_preamble_and_closing_hashes() {
        let parser = DocumentParser::new();
        let text = "<!-- translated -->\nIntro line.\n\n# Announcing TypeScript 5.7 ##\r\nBody";

        let doc = parser.parse("5.7.md", text).unwrap();
        assert_eq!(doc.title, "Announcing TypeScript 5.7");
        assert_eq!(doc.version, Version::new(5, 7));
        assert_eq!(doc.body, "Body");
    }

    #[test]
    fn test_skips_headings_inside_code_fences() {
        let parser = DocumentParser::new();
        let text = "```sh\n# install 1.2\nnpm i typescript\n```\n# TypeScript 5.5\n";

        let doc = parser.parse("5.5.md", text).unwrap();
        assert_eq!(doc.version, Version::new(5, 5));
    }

    #[test]
    fn test_skips_headings_inside_html_blocks() {
        let parser = DocumentParser::new();
        let text = "<!--\n# TypeScript 1.0 (original English, do not translate)\n-->\n# TypeScript 5.6\n\nBody\n";

        let doc = parser.parse("ko/5.6.md", text).unwrap();
        assert_eq!(doc.version, Version::new(5, 6));
        assert_eq!(doc.title, "TypeScript 5.6");
        assert_eq!(doc.body, "\nBody\n");
    }

    #[test]
    fn test_setext_heading() {
        let parser = DocumentParser::new();
        let text = "TypeScript 5.4\n==============\n\nBody\n";

        let doc = parser.parse("5.4.md", text).unwrap();
        assert_eq!(doc.version, Version::new(5, 4));
        assert_eq!(doc.title, "TypeScript 5.4");
        assert!(doc.body.contains("Body"));
        assert!(!doc.body.contains("==="));
    }

    #[test]
    fn test_inline_code_in_title() {
        let parser = DocumentParser::new();

        let doc = parser.parse("5.5.md", "# `TypeScript` 5.5 Release\n").unwrap();
        assert_eq!(doc.title, "TypeScript 5.5 Release");
        assert_eq!(doc.body, "");
    }

    #[test]
    fn test_version_token_attached_to_text() {
        let parser = DocumentParser::new();

        for (heading, expected) in [
            ("# TypeScript5.6", Version::new(5, 6)),
            ("# TypeScript 5.6.x", Version::new(5, 6)),
            ("# TS 5.6_beta", Version::new(5, 6)),
            ("# Announcing v4.9.5", Version::new(4, 9)),
        ] {
            let doc = parser.parse("notes.md", heading).unwrap();
            assert_eq!(doc.version, expected, "heading {heading:?}");
        }
    }

    #[test]
    fn test_leading_thematic_break_is_not_front_matter() {
        let parser = DocumentParser::new();
        let text = "---\n# TypeScript 5.6\n\nIntro paragraph.\n\n---\nMore.\n";

        let doc = parser.parse("5.6.md", text).unwrap();
        assert_eq!(doc.version, Version::new(5, 6));
        assert!(doc.metadata.is_empty());
        assert!(doc.body.contains("Intro paragraph."));
    }

    #[test]
    fn test_front_matter_becomes_metadata() {
        let parser = DocumentParser::new();
        let text = "---\nlang: zh\nversion: 9.9\n---\n# TypeScript 5.4\n";

        let doc = parser.parse("zh/5.4.md", text).unwrap();
        assert_eq!(doc.version, Version::new(5, 4));
        assert_eq!(doc.metadata.get("lang").map(String::as_str), Some("zh"));
    }

    #[test]
    fn test_no_heading_is_parse_error() {
        let parser = DocumentParser::new();

        let err = parser.parse("plain.md", "Just prose.\n## Sub only 5.6\n").unwrap_err();
        assert!(err.is_parse());
        assert!(err.to_string().contains("no level-1 heading"));
    }

    #[test]
    fn test_missing_version_token_is_parse_error() {
        let parser = DocumentParser::new();

        let err = parser.parse("x.md", "# TypeScript Next\n").unwrap_err();
        assert!(err.is_parse());
        assert!(parser.parse("y.md", "# TypeScript 99999999999.1\n").unwrap_err().is_parse());
    }

    #[test]
    fn test_empty_and_untitled() {
        let parser = DocumentParser::new();

        assert!(parser.parse("empty.md", "  \n\n").unwrap_err().is_parse());
        assert!(parser.parse("bom.md", "\u{feff}").unwrap_err().is_parse());
        assert!(parser.parse("bare.md", "#\nbody 5.6\n").unwrap_err().is_parse());
    }

    #[test]
    fn test_hash_covers_full_text() {
        let parser = DocumentParser::new();
        let a = parser.parse("a.md", "# TypeScript 5.6\nA\n").unwrap();
        let b = parser.parse("b.md", "# TypeScript 5.6\nB\n").unwrap();
        assert_ne!(a.content_hash, b.content_hash);
    }
}
