// file: src/repository/mod.rs
// description: Documentation repository discovery module exports
// reference: Internal module structure

pub mod scanner;

pub use scanner::{ScannedSource, SourceScanner};
