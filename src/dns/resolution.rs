//! IP address resolution and reverse DNS lookup.
//!
//! A and AAAA both resolve every address of the host and keep one address
//! family. PTR treats its input as an IP address.

use std::net::IpAddr;
use std::sync::Arc;

use async_trait::async_trait;
use hickory_resolver::TokioAsyncResolver;

use super::lookup::{empty_or_error, RecordLookup};
use super::types::{DnsRecord, RecordType};
use crate::error_handling::LookupError;

/// Resolves host addresses and keeps one address family.
pub struct AddressLookup {
    resolver: Arc<TokioAsyncResolver>,
    record_type: RecordType,
}

impl AddressLookup {
    /// IPv4 addresses, reported as `A` records.
    pub fn ipv4(resolver: Arc<TokioAsyncResolver>) -> Self {
        Self {
            resolver,
            record_type: RecordType::A,
        }
    }

    /// IPv6 addresses, reported as `AAAA` records.
    pub fn ipv6(resolver: Arc<TokioAsyncResolver>) -> Self {
        Self {
            resolver,
            record_type: RecordType::Aaaa,
        }
    }
}

/// Keeps the addresses of the family matching `record_type` as records.
pub(crate) fn address_records(
    record_type: RecordType,
    addresses: impl IntoIterator<Item = IpAddr>,
) -> Vec<DnsRecord> {
    addresses
        .into_iter()
        .filter(|ip| match record_type {
            RecordType::A => ip.is_ipv4(),
            RecordType::Aaaa => ip.is_ipv6(),
            _ => false,
        })
        .map(|ip| DnsRecord::new(record_type, ip.to_string()))
        .collect()
}

#[async_trait]
impl RecordLookup for AddressLookup {
    fn record_type(&self) -> RecordType {
        self.record_type
    }

    async fn lookup(&self, domain: &str) -> Result<Vec<DnsRecord>, LookupError> {
        match self.resolver.lookup_ip(domain).await {
            Ok(response) => Ok(address_records(self.record_type, response.iter())),
            Err(e) => empty_or_error(domain, self.record_type, e),
        }
    }
}

/// Reverse-resolves an IP address to its PTR names.
///
/// The input must be an IP address; anything else fails with
/// [`LookupError::NotAnAddress`]. Callers that pass host names get no PTR
/// records, which the aggregator treats like any other failed lookup.
pub struct PtrLookup {
    resolver: Arc<TokioAsyncResolver>,
}

impl PtrLookup {
    pub fn new(resolver: Arc<TokioAsyncResolver>) -> Self {
        Self { resolver }
    }
}

/// Parses a PTR lookup input.
pub(crate) fn parse_ptr_input(input: &str) -> Result<IpAddr, LookupError> {
    input
        .trim()
        .parse::<IpAddr>()
        .map_err(|source| LookupError::NotAnAddress {
            input: input.to_string(),
            source,
        })
}

#[async_trait]
impl RecordLookup for PtrLookup {
    fn record_type(&self) -> RecordType {
        RecordType::Ptr
    }

    async fn lookup(&self, domain: &str) -> Result<Vec<DnsRecord>, LookupError> {
        let ip = parse_ptr_input(domain)?;
        match self.resolver.reverse_lookup(ip).await {
            Ok(response) => Ok(response
                .iter()
                .map(|name| DnsRecord::new(RecordType::Ptr, name.to_utf8()))
                .collect()),
            Err(e) => empty_or_error(domain, RecordType::Ptr, e),
        }
    }
}
