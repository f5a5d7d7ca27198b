// file: src/registry/service.rs
// description: document set registry with atomic swap-on-reload
// reference: https://doc.rust-lang.org/std/sync/struct.RwLock.html

use crate::error::{RegistryError, Result};
use crate::index::VersionIndex;
use crate::models::{Document, Version};
use crate::parser::DocumentParser;
use crate::registry::report::{LoadReport, LoadStats};
use crate::registry::source::DocumentSource;
use crate::utils::OperationTimer;
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use std::time::Duration;
use tracing::{debug, info, warn};

const SLOW_LOAD_THRESHOLD: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryState {
    Empty,
    Loading,
    Ready,
}

/// Owns the published [`VersionIndex`]. Readers get `Arc` snapshots; a load
/// builds a fresh index off to the side and swaps it in only once complete,
/// so no reader ever observes a partially built set.
pub struct Registry {
    parser: DocumentParser,
    index: RwLock<Arc<VersionIndex>>,
    state: RwLock<RegistryState>,
    // serializes loads
    load_lock: Mutex<()>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            parser: DocumentParser::new(),
            index: RwLock::new(Arc::new(VersionIndex::new())),
            state: RwLock::new(RegistryState::Empty),
            load_lock: Mutex::new(()),
        }
    }

    /// Reads, parses and indexes every source, then publishes the result as
    /// the new current index. Failed sources are reported, not fatal.
    pub fn load<I>(&self, sources: I) -> LoadReport
    where
        I: IntoIterator,
        I::Item: DocumentSource,
    {
        let _guard = self.load_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let previous_state = self.state();
        self.set_state(RegistryState::Loading);

        let timer = OperationTimer::new("registry load");
        let mut index = VersionIndex::new();
        let mut loaded = Vec::new();
        let mut errors = Vec::new();
        let mut stats = LoadStats::new();

        for source in sources {
            let source_path = source.source_path();

            let text = match source.read_text() {
                Ok(text) => text,
                Err(err) => {
                    warn!("Failed to read {}: {}", source_path, err);
                    stats.sources_failed += 1;
                    errors.push(err);
                    continue;
                }
            };

            stats.sources_read += 1;
            stats.total_bytes_read += text.len() as u64;

            let document = match self.parser.parse(&source_path, &text) {
                Ok(document) => Arc::new(document),
                Err(err) => {
                    warn!("{}", err);
                    stats.sources_failed += 1;
                    errors.push(err);
                    continue;
                }
            };

            match index.insert(Arc::clone(&document)) {
                Ok(()) => {
                    debug!("Indexed {} from {}", document.version, source_path);
                    stats.documents_loaded += 1;
                    loaded.push(document);
                }
                Err(err) => {
                    warn!("{}", err);
                    stats.sources_failed += 1;
                    errors.push(err);
                }
            }
        }

        timer.warn_if_slow(SLOW_LOAD_THRESHOLD, "building version index");
        stats.duration_ms = timer.finish_with_count(stats.documents_loaded).as_millis() as u64;

        let generation = self.publish(index);
        self.set_state(RegistryState::Ready);

        info!(
            "Registry generation {} ready ({:?} -> Ready): {} documents, {} errors",
            generation,
            previous_state,
            loaded.len(),
            errors.len()
        );

        LoadReport {
            loaded,
            errors,
            generation,
            stats,
        }
    }

    fn publish(&self, index: VersionIndex) -> u64 {
        let mut current = self.index.write().unwrap_or_else(PoisonError::into_inner);
        let generation = current.generation() + 1;
        *current = Arc::new(index.with_generation(generation));
        generation
    }

    fn set_state(&self, state: RegistryState) {
        *self.state.write().unwrap_or_else(PoisonError::into_inner) = state;
    }

    pub fn state(&self) -> RegistryState {
        *self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// The currently published index. Holding the snapshot keeps it alive
    /// across later reloads.
    pub fn snapshot(&self) -> Arc<VersionIndex> {
        Arc::clone(&self.index.read().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn get(&self, version: &str) -> Result<Arc<Document>> {
        let version: Version = version.parse()?;
        self.get_version(&version)
    }

    pub fn get_version(&self, version: &Version) -> Result<Arc<Document>> {
        self.snapshot()
            .lookup(version)
            .cloned()
            .ok_or(RegistryError::NotFound(*version))
    }

    pub fn all(&self) -> Vec<Arc<Document>> {
        self.snapshot().ordered_list()
    }

    pub fn latest(&self) -> Option<Arc<Document>> {
        self.snapshot().latest().cloned()
    }

    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }

    pub fn generation(&self) -> u64 {
        self.snapshot().generation()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
