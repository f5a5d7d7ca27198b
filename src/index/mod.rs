// file: src/index/mod.rs
// description: version index module exports
// reference: internal module structure

pub mod version_index;

pub use version_index::VersionIndex;
