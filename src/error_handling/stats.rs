//! Lookup statistics tracking.
//!
//! This module provides thread-safe counters of lookup outcomes per record
//! type, shared by every aggregator in a session.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use strum::IntoEnumIterator;

use super::types::LookupOutcome;
use crate::dns::RecordType;

/// Thread-safe lookup statistics tracker.
///
/// Holds one atomic counter per `(RecordType, LookupOutcome)` pair. All
/// counters are created up front, so recording never allocates or locks.
/// Share it across tasks with `Arc`.
pub struct LookupStats {
    counters: HashMap<(RecordType, LookupOutcome), AtomicUsize>,
}

impl LookupStats {
    pub fn new() -> Self {
        let mut counters = HashMap::new();
        for record_type in RecordType::iter() {
            for outcome in LookupOutcome::iter() {
                counters.insert((record_type, outcome), AtomicUsize::new(0));
            }
        }
        LookupStats { counters }
    }

    /// Records the outcome of one lookup.
    pub fn record(&self, record_type: RecordType, outcome: LookupOutcome) {
        if let Some(counter) = self.counters.get(&(record_type, outcome)) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "No counter for {record_type}/{outcome}. This indicates a bug in LookupStats initialization."
            );
        }
    }

    /// Count for one record type and outcome.
    pub fn count(&self, record_type: RecordType, outcome: LookupOutcome) -> usize {
        self.counters
            .get(&(record_type, outcome))
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Count for one outcome across all record types.
    pub fn total(&self, outcome: LookupOutcome) -> usize {
        RecordType::iter().map(|t| self.count(t, outcome)).sum()
    }

    /// Total number of lookups recorded.
    pub fn total_lookups(&self) -> usize {
        LookupOutcome::iter().map(|o| self.total(o)).sum()
    }

    /// Logs one summary line per record type that saw any lookups.
    pub fn log_summary(&self) {
        if self.total_lookups() == 0 {
            return;
        }
        for record_type in RecordType::iter() {
            let parts: Vec<String> = LookupOutcome::iter()
                .filter_map(|o| {
                    let n = self.count(record_type, o);
                    (n > 0).then(|| format!("{n} {o}"))
                })
                .collect();
            if !parts.is_empty() {
                log::info!("{record_type} lookups: {}", parts.join(", "));
            }
        }
    }
}

impl std::fmt::Debug for LookupStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LookupStats")
            .field("total_lookups", &self.total_lookups())
            .finish()
    }
}

impl Default for LookupStats {
    fn default() -> Self {
        Self::new()
    }
}
