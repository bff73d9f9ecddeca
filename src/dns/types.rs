//! DNS record data types.
//!
//! This module defines the record type enumeration and the textual record
//! values produced by lookups and consumed by the table and CSV writers.

use std::fmt;
use std::str::FromStr;

use strum_macros::{AsRefStr, Display as DisplayMacro, EnumIter as EnumIterMacro, EnumString};

use crate::error_handling::ConfigError;

/// DNS record types resolved for every domain.
///
/// The canonical code (`A`, `MX`, ...) is used everywhere a record type is
/// shown or written: in record strings, tables and CSV rows.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIterMacro,
    EnumString,
    DisplayMacro,
    AsRefStr,
)]
#[strum(ascii_case_insensitive, serialize_all = "UPPERCASE")]
pub enum RecordType {
    /// IPv4 address
    A,
    /// IPv6 address
    Aaaa,
    /// Canonical name
    Cname,
    /// Mail exchanger
    Mx,
    /// Name server
    Ns,
    /// Reverse pointer
    Ptr,
    /// Start of authority
    Soa,
    /// Service locator
    Srv,
    /// Text
    Txt,
}

impl RecordType {
    /// All record types in canonical order.
    pub const ALL: [RecordType; 9] = [
        RecordType::A,
        RecordType::Aaaa,
        RecordType::Cname,
        RecordType::Mx,
        RecordType::Ns,
        RecordType::Ptr,
        RecordType::Soa,
        RecordType::Srv,
        RecordType::Txt,
    ];

    /// Parses a record type code, reporting unknown codes as a configuration error.
    pub fn parse_code(code: &str) -> Result<Self, ConfigError> {
        RecordType::from_str(code.trim())
            .map_err(|_| ConfigError::UnknownRecordType(code.trim().to_string()))
    }
}

/// A single resolved record: its type and a single-line textual payload.
///
/// Rendered as `"<TYPE> <data>"`, which is the form the table and CSV
/// writers split back into two columns.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DnsRecord {
    record_type: RecordType,
    data: String,
}

impl DnsRecord {
    pub fn new(record_type: RecordType, data: impl Into<String>) -> Self {
        Self {
            record_type,
            data: data.into(),
        }
    }

    pub fn record_type(&self) -> RecordType {
        self.record_type
    }

    pub fn data(&self) -> &str {
        &self.data
    }
}

impl fmt::Display for DnsRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.record_type, self.data)
    }
}

/// The records resolved for one domain.
///
/// Record order is the order in which lookups completed. Records produced by
/// one lookup are always adjacent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionResult {
    pub domain: String,
    pub records: Vec<DnsRecord>,
    /// Lookups that failed, timed out or were cancelled. Diagnostic only.
    pub failed_lookups: usize,
}

impl ResolutionResult {
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Records rendered as `"<TYPE> <data>"` strings.
    pub fn record_strings(&self) -> Vec<String> {
        self.records.iter().map(ToString::to_string).collect()
    }
}

/// Domains submitted together in one batch.
///
/// Names are trimmed, empty entries are dropped and duplicates are removed
/// while keeping first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainBatch {
    domains: Vec<String>,
}

impl DomainBatch {
    /// Builds a batch from a comma-separated list, falling back to `default_domain`
    /// when the list holds no names.
    pub fn parse(input: &str, default_domain: &str) -> Self {
        let mut domains: Vec<String> = Vec::new();
        for name in input.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            if !domains.iter().any(|d| d == name) {
                domains.push(name.to_string());
            }
        }
        if domains.is_empty() {
            domains.push(default_domain.trim().to_string());
        }
        Self { domains }
    }

    pub fn domains(&self) -> &[String] {
        &self.domains
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}

/// SRV service and protocol qualifier, e.g. `_sip._tcp`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SrvService {
    service: String,
    protocol: String,
}

impl SrvService {
    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    /// Name to query for `domain`: `_service._proto.domain`.
    pub fn query_name(&self, domain: &str) -> String {
        format!("{}.{}.{}", self.service, self.protocol, domain)
    }
}

impl FromStr for SrvService {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidSrvService(s.to_string());
        let (service, protocol) = s.trim().split_once('.').ok_or_else(invalid)?;
        let valid_label = |label: &str| {
            label.len() > 1
                && label.starts_with('_')
                && label[1..]
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-')
        };
        if !valid_label(service) || !valid_label(protocol) {
            return Err(invalid());
        }
        Ok(Self {
            service: service.to_string(),
            protocol: protocol.to_string(),
        })
    }
}

impl fmt::Display for SrvService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.service, self.protocol)
    }
}
