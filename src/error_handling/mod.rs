//! Error handling and lookup statistics.
//!
//! This module provides:
//! - Error type definitions for lookups, exports, configuration and startup
//! - Lookup outcome categories
//! - Thread-safe lookup statistics
//!
//! Failures are kept local: a lookup error never leaves its domain's
//! aggregator, and an export error never leaves its domain's delivery.

mod stats;
mod types;

// Re-export public API
pub use stats::LookupStats;
pub use types::{ConfigError, ExportError, InitializationError, LookupError, LookupOutcome};
