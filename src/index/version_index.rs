// file: src/index/version_index.rs
// description: version -> document map with uniqueness and numeric ordering
// reference: https://doc.rust-lang.org/std/collections/struct.BTreeMap.html

use crate::error::{RegistryError, Result};
use crate::models::{Document, Version};
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::sync::Arc;

/// Documents keyed by version. Iteration is always in ascending version
/// order. Once wrapped in an `Arc` and published by the registry an index is
/// never mutated again.
#[derive(Debug, Clone, Default)]
pub struct VersionIndex {
    entries: BTreeMap<Version, Arc<Document>>,
    generation: u64,
}

impl VersionIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `document`; an existing entry for the same version is kept and
    /// the new one is rejected.
    pub fn insert(&mut self, document: Arc<Document>) -> Result<()> {
        match self.entries.entry(document.version) {
            Entry::Occupied(existing) => Err(RegistryError::DuplicateVersion {
                version: document.version,
                source_path: document.source_path.clone(),
                existing_path: existing.get().source_path.clone(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(document);
                Ok(())
            }
        }
    }

    pub fn lookup(&self, version: &Version) -> Option<&Arc<Document>> {
        self.entries.get(version)
    }

    pub fn contains(&self, version: &Version) -> bool {
        self.entries.contains_key(version)
    }

    pub fn ordered_list(&self) -> Vec<Arc<Document>> {
        self.entries.values().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Document>> {
        self.entries.values()
    }

    pub fn versions(&self) -> Vec<Version> {
        self.entries.keys().copied().collect()
    }

    pub fn latest(&self) -> Option<&Arc<Document>> {
        self.entries.values().next_back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub(crate) fn with_generation(mut self, generation: u64) -> Self {
        self.generation = generation;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn doc(version: &str, path: &str) -> Arc<Document> {
        let version: Version = version.parse().unwrap();
        Arc::new(Document::new(
            version,
            format!("TypeScript {}", version),
            String::new(),
            path.to_string(),
            path,
        ))
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut index = VersionIndex::new();
        index.insert(doc("5.6", "a.md")).unwrap();

        let found = index.lookup(&Version::new(5, 6)).unwrap();
        assert_eq!(found.source_path, "a.md");
        assert!(index.lookup(&Version::new(5, 7)).is_none());
        assert!(index.contains(&Version::new(5, 6)));
    }

    #[test]
    fn test_duplicate_keeps_first() {
        let mut index = VersionIndex::new();
        index.insert(doc("5.6", "first.md")).unwrap();

        let err = index.insert(doc("5.6", "second.md")).unwrap_err();
        match err {
            RegistryError::DuplicateVersion {
                version,
                source_path,
                existing_path,
            } => {
                assert_eq!(version, Version::new(5, 6));
                assert_eq!(source_path, "second.md");
                assert_eq!(existing_path, "first.md");
            }
            other => panic!("unexpected error: {other}"),
        }

        assert_eq!(index.len(), 1);
        assert_eq!(index.lookup(&Version::new(5, 6)).unwrap().source_path, "first.md");
    }

    #[test]
    fn test_ordered_list_is_numeric() {
        let mut index = VersionIndex::new();
        for v in ["5.10", "4.9", "5.9", "5.0"] {
            index.insert(doc(v, &format!("{v}.md"))).unwrap();
        }

        let ordered: Vec<String> = index
            .ordered_list()
            .iter()
            .map(|d| d.version.to_string())
            .collect();
        assert_eq!(ordered, vec!["4.9", "5.0", "5.9", "5.10"]);
        assert_eq!(index.latest().unwrap().version, Version::new(5, 10));
        assert_eq!(index.versions().first(), Some(&Version::new(4, 9)));
    }

    #[test]
    fn test_empty_index() {
        let index = VersionIndex::new();
        assert!(index.is_empty());
        assert!(index.latest().is_none());
        assert!(index.ordered_list().is_empty());
        assert_eq!(index.generation(), 0);
    }
}
