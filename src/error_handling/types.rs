//! Error type definitions.
//!
//! This module defines the error types used throughout the application and
//! the outcome categories tracked by [`super::LookupStats`].

use std::io;
use std::net::AddrParseError;
use std::time::Duration;

use hickory_resolver::error::ResolveError;
use hickory_resolver::proto::error::ProtoError;
use hickory_resolver::proto::op::ResponseCode;
use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the DNS resolver.
    #[error("DNS resolver initialization error: {0}")]
    DnsResolverError(String),
}

/// Invalid configuration values rejected while parsing options.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The SRV qualifier is not of the form `_service._proto`.
    #[error("invalid SRV service '{0}', expected the form _service._proto (e.g. _sip._tcp)")]
    InvalidSrvService(String),

    /// A record type code outside the supported set.
    #[error("unknown record type '{0}'")]
    UnknownRecordType(String),
}

/// A single record-type lookup failed.
///
/// These errors never reach the user: the aggregator counts them and
/// carries on with the remaining lookups.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The system resolver returned an error.
    #[error("resolver error: {0}")]
    Resolve(#[from] ResolveError),

    /// Building, encoding or decoding a DNS message failed.
    #[error("DNS protocol error: {0}")]
    Protocol(#[from] ProtoError),

    /// Socket I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A reverse lookup was requested for something that is not an IP address.
    #[error("'{input}' is not an IP address: {source}")]
    NotAnAddress {
        input: String,
        #[source]
        source: AddrParseError,
    },

    /// The server answered with a non-success response code.
    #[error("server responded with {0}")]
    ResponseCode(ResponseCode),

    /// The lookup did not finish before its deadline.
    #[error("lookup timed out after {0:?}")]
    Timeout(Duration),
}

/// Error writing a domain's records to a CSV file.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The domain cannot be used as a file name.
    #[error("'{0}' cannot be used as a file name")]
    InvalidFileName(String),

    /// Creating or writing the file failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The CSV writer failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// How a single lookup ended, as seen by the aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum LookupOutcome {
    /// The lookup produced at least one record
    Records,
    /// The lookup succeeded without records
    Empty,
    /// The lookup returned an error
    Failed,
    /// The lookup hit its deadline
    TimedOut,
    /// The batch was cancelled before the lookup finished
    Cancelled,
}

impl LookupOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            LookupOutcome::Records => "records",
            LookupOutcome::Empty => "empty",
            LookupOutcome::Failed => "failed",
            LookupOutcome::TimedOut => "timed out",
            LookupOutcome::Cancelled => "cancelled",
        }
    }

    /// Whether the lookup counts as failed for the domain's diagnostics.
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            LookupOutcome::Failed | LookupOutcome::TimedOut | LookupOutcome::Cancelled
        )
    }
}

impl std::fmt::Display for LookupOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_outcome_as_str() {
        assert_eq!(LookupOutcome::Records.as_str(), "records");
        assert_eq!(LookupOutcome::TimedOut.to_string(), "timed out");
    }

    #[test]
    fn test_lookup_outcome_failure_classification() {
        assert!(!LookupOutcome::Records.is_failure());
        assert!(!LookupOutcome::Empty.is_failure());
        assert!(LookupOutcome::Failed.is_failure());
        assert!(LookupOutcome::TimedOut.is_failure());
        assert!(LookupOutcome::Cancelled.is_failure());
    }

    #[test]
    fn test_lookup_error_messages() {
        let err = LookupError::Timeout(Duration::from_secs(3));
        assert_eq!(err.to_string(), "lookup timed out after 3s");

        let source = "example.com".parse::<std::net::IpAddr>().unwrap_err();
        let err = LookupError::NotAnAddress {
            input: "example.com".to_string(),
            source,
        };
        assert!(err.to_string().starts_with("'example.com' is not an IP address"));

        let err = LookupError::ResponseCode(ResponseCode::ServFail);
        assert!(err.to_string().starts_with("server responded with "));
    }

    #[test]
    fn test_export_error_invalid_file_name() {
        let err = ExportError::InvalidFileName("../etc".to_string());
        assert_eq!(err.to_string(), "'../etc' cannot be used as a file name");
    }

    #[test]
    fn test_config_error_messages() {
        let err = ConfigError::UnknownRecordType("CAA".to_string());
        assert_eq!(err.to_string(), "unknown record type 'CAA'");
    }
}
