// file: src/registry/mod.rs
// description: registry module exports and public api
// reference: load / query lifecycle

mod report;
mod service;
mod source;

pub use report::{LoadReport, LoadStats};
pub use service::{Registry, RegistryState};
pub use source::{DocumentSource, InlineSource};
