//! The lookup capability shared by every record type.

use async_trait::async_trait;
use hickory_resolver::error::{ResolveError, ResolveErrorKind};

use super::types::{DnsRecord, RecordType};
use crate::error_handling::LookupError;

/// Resolves one record type for a domain.
///
/// A lookup either returns every record it found (possibly none) or fails
/// with a [`LookupError`]; it never returns partial data alongside an error.
#[async_trait]
pub trait RecordLookup: Send + Sync {
    /// The record type this lookup produces.
    fn record_type(&self) -> RecordType;

    /// Queries `domain` and returns the records found.
    async fn lookup(&self, domain: &str) -> Result<Vec<DnsRecord>, LookupError>;
}

/// Maps a resolver error to a lookup result.
///
/// "No records found" (including NXDOMAIN) is an empty answer, not a failure.
/// Everything else (timeouts, network errors, etc.) is propagated.
pub(crate) fn empty_or_error(
    domain: &str,
    record_type: RecordType,
    e: ResolveError,
) -> Result<Vec<DnsRecord>, LookupError> {
    if matches!(e.kind(), ResolveErrorKind::NoRecordsFound { .. }) {
        log::debug!("No {record_type} records for {domain}");
        Ok(Vec::new())
    } else {
        Err(LookupError::Resolve(e))
    }
}
