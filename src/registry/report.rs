// file: src/registry/report.rs
// description: outcome and statistics of a registry load cycle
// reference: partial-failure batch reporting

use crate::error::RegistryError;
use crate::models::Document;
use std::sync::Arc;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadStats {
    pub sources_read: usize,
    pub sources_failed: usize,
    pub documents_loaded: usize,
    pub total_bytes_read: u64,
    pub duration_ms: u64,
}

impl LoadStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success_rate(&self) -> f64 {
        let total = self.documents_loaded + self.sources_failed;
        if total == 0 {
            return 0.0;
        }
        (self.documents_loaded as f64 / total as f64) * 100.0
    }
}

/// Result of one `Registry::load`. Errors never abort a load; every source
/// ends up either in `loaded` or as one entry in `errors`.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Indexed documents in input order.
    pub loaded: Vec<Arc<Document>>,
    pub errors: Vec<RegistryError>,
    pub generation: u64,
    pub stats: LoadStats,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn parse_errors(&self) -> impl Iterator<Item = &RegistryError> {
        self.errors.iter().filter(|e| e.is_parse())
    }

    pub fn duplicate_errors(&self) -> impl Iterator<Item = &RegistryError> {
        self.errors.iter().filter(|e| e.is_duplicate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_rate() {
        let mut stats = LoadStats::new();
        stats.documents_loaded = 9;
        stats.sources_failed = 1;
        assert!((stats.success_rate() - 90.0).abs() < f64::EPSILON);

        assert_eq!(LoadStats::new().success_rate(), 0.0);
    }

    #[test]
    fn test_error_partitions() {
        let report = LoadReport {
            errors: vec![
                RegistryError::parse("a.md", "no level-1 heading found"),
                RegistryError::Validation("other".to_string()),
            ],
            ..LoadReport::default()
        };

        assert!(!report.is_clean());
        assert_eq!(report.parse_errors().count(), 1);
        assert_eq!(report.duplicate_errors().count(), 0);
    }
}
