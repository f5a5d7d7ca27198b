// file: src/parser/mod.rs
// description: document parsing module exports
// reference: internal module structure

pub mod document;
pub mod frontmatter;
pub mod markdown;
pub mod patterns;

pub use document::DocumentParser;
pub use frontmatter::{Frontmatter, FrontmatterParser};
pub use markdown::{CodeSample, Heading, MarkdownParser};
