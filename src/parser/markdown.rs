// file: src/parser/markdown.rs
// description: outline, section and code sample extraction with pulldown-cmark
// reference: https://docs.rs/pulldown-cmark

use pulldown_cmark::{CodeBlockKind, Event, Parser, Tag, TagEnd};

pub struct MarkdownParser;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub level: u32,
    pub text: String,
    /// Byte offset of the heading in the parsed text.
    pub offset: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeSample {
    pub language: Option<String>,
    pub content: String,
}

impl MarkdownParser {
    pub fn new() -> Self {
        Self
    }

    pub fn outline(&self, content: &str) -> Vec<Heading> {
        let mut headings = Vec::new();
        let mut current: Option<(u32, usize, String)> = None;

        for (event, range) in Parser::new(content).into_offset_iter() {
            match event {
                Event::Start(Tag::Heading { level, .. }) => {
                    current = Some((level as u32, range.start, String::new()));
                }
                Event::End(TagEnd::Heading(_)) => {
                    if let Some((level, offset, text)) = current.take() {
                        headings.push(Heading {
                            level,
                            text: text.trim().to_string(),
                            offset,
                        });
                    }
                }
                Event::Text(text) | Event::Code(text) => {
                    if let Some((_, _, ref mut heading_text)) = current {
                        heading_text.push_str(&text);
                    }
                }
                _ => {}
            }
        }

        headings
    }

    /// Text under the first heading matching `heading` (case-insensitive), up
    /// to the next heading of the same or a higher level.
    pub fn extract_section(&self, content: &str, heading: &str) -> Option<String> {
        let mut target_level: Option<u32> = None;
        let mut section_content = String::new();
        let mut heading_text = String::new();
        let mut heading_level: Option<u32> = None;

        for event in Parser::new(content) {
            match event {
                Event::Start(Tag::Heading { level, .. }) => {
                    let level = level as u32;
                    if let Some(target) = target_level {
                        if level <= target {
                            break;
                        }
                        section_content.push('\n');
                    }
                    heading_level = Some(level);
                    heading_text.clear();
                }
                Event::End(TagEnd::Heading(_)) => {
                    if let Some(level) = heading_level.take() {
                        if target_level.is_none()
                            && heading_text.trim().to_lowercase() == heading.trim().to_lowercase()
                        {
                            target_level = Some(level);
                        } else if target_level.is_some() {
                            section_content.push_str(heading_text.trim());
                            section_content.push('\n');
                        }
                    }
                }
                Event::Text(text) | Event::Code(text) => {
                    if heading_level.is_some() {
                        heading_text.push_str(&text);
                    } else if target_level.is_some() {
                        section_content.push_str(&text);
                    }
                }
                Event::SoftBreak | Event::HardBreak => {
                    if target_level.is_some() && heading_level.is_none() {
                        section_content.push('\n');
                    }
                }
                Event::End(TagEnd::Paragraph | TagEnd::Item) => {
                    if target_level.is_some() {
                        section_content.push('\n');
                    }
                }
                _ => {}
            }
        }

        target_level?;
        let trimmed = section_content.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    pub fn code_samples(&self, content: &str) -> Vec<CodeSample> {
        let mut samples = Vec::new();
        let mut current: Option<CodeSample> = None;

        for event in Parser::new(content) {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let language = match kind {
                        CodeBlockKind::Fenced(info) => info
                            .split_whitespace()
                            .next()
                            .map(|lang| lang.to_string()),
                        CodeBlockKind::Indented => None,
                    };
                    current = Some(CodeSample {
                        language,
                        content: String::new(),
                    });
                }
                Event::End(TagEnd::CodeBlock) => {
                    if let Some(sample) = current.take() {
                        samples.push(sample);
                    }
                }
                Event::Text(text) => {
                    if let Some(ref mut sample) = current {
                        sample.content.push_str(&text);
                    }
                }
                _ => {}
            }
        }

        samples
    }
}

impl Default for MarkdownParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOTES: &str = "## Region-Prioritized Diagnostics\n\nFaster errors.\n\n### Details\n\nMore.\n\n## The `--noCheck` Option\n\n```ts\nlet x = 1;\n```\n";

    #[test]
    fn test_outline() {
        let parser = MarkdownParser::new();
        let outline = parser.outline(NOTES);

        let texts: Vec<_> = outline.iter().map(|h| (h.level, h.text.as_str())).collect();
        assert_eq!(
            texts,
            vec![
                (2, "Region-Prioritized Diagnostics"),
                (3, "Details"),
                (2, "The --noCheck Option"),
            ]
        );
        assert_eq!(outline[0].offset, 0);
        assert!(outline[1].offset > outline[0].offset);
    }

    #[test]
    fn test_section_extraction_stops_at_sibling() {
        let parser = MarkdownParser::new();
        let section = parser
            .extract_section(NOTES, "region-prioritized diagnostics")
            .unwrap();

        assert!(section.contains("Faster errors."));
        assert!(section.contains("Details"));
        assert!(section.contains("More."));
        assert!(!section.contains("noCheck"));
    }

    #[test]
    fn test_section_missing() {
        let parser = MarkdownParser::new();
        assert!(parser.extract_section(NOTES, "Nonexistent").is_none());
    }

    #[test]
    fn test_code_samples() {
        let parser = MarkdownParser::new();
        let samples = parser.code_samples(NOTES);

        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].language.as_deref(), Some("ts"));
        assert_eq!(samples[0].content, "let x = 1;\n");
    }
}
