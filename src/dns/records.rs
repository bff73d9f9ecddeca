//! DNS record lookups answered by the system resolver (CNAME, MX, NS, SRV, TXT).

use std::sync::Arc;

use async_trait::async_trait;
use hickory_resolver::proto::rr::{RData, RecordType as ProtoRecordType};
use hickory_resolver::TokioAsyncResolver;

use super::lookup::{empty_or_error, RecordLookup};
use super::types::{DnsRecord, RecordType, SrvService};
use crate::error_handling::LookupError;

/// Queries the canonical name of a domain. Yields at most one record.
pub struct CnameLookup {
    resolver: Arc<TokioAsyncResolver>,
}

impl CnameLookup {
    pub fn new(resolver: Arc<TokioAsyncResolver>) -> Self {
        Self { resolver }
    }
}

#[async_trait]
impl RecordLookup for CnameLookup {
    fn record_type(&self) -> RecordType {
        RecordType::Cname
    }

    async fn lookup(&self, domain: &str) -> Result<Vec<DnsRecord>, LookupError> {
        match self.resolver.lookup(domain, ProtoRecordType::CNAME).await {
            Ok(lookup) => Ok(lookup
                .iter()
                .find_map(|rdata| match rdata {
                    RData::CNAME(cname) => Some(DnsRecord::new(RecordType::Cname, cname.to_utf8())),
                    _ => None,
                })
                .into_iter()
                .collect()),
            Err(e) => empty_or_error(domain, RecordType::Cname, e),
        }
    }
}

/// Queries mail exchangers. Each record reads `"<exchange> <preference>"`.
pub struct MxLookup {
    resolver: Arc<TokioAsyncResolver>,
}

impl MxLookup {
    pub fn new(resolver: Arc<TokioAsyncResolver>) -> Self {
        Self { resolver }
    }
}

#[async_trait]
impl RecordLookup for MxLookup {
    fn record_type(&self) -> RecordType {
        RecordType::Mx
    }

    async fn lookup(&self, domain: &str) -> Result<Vec<DnsRecord>, LookupError> {
        match self.resolver.lookup(domain, ProtoRecordType::MX).await {
            Ok(lookup) => {
                let mut exchangers: Vec<(u16, String)> = lookup
                    .iter()
                    .filter_map(|rdata| {
                        if let RData::MX(mx) = rdata {
                            Some((mx.preference(), mx.exchange().to_utf8()))
                        } else {
                            None
                        }
                    })
                    .collect();
                // Lower preference = higher priority
                exchangers.sort_by_key(|(preference, _)| *preference);
                Ok(exchangers
                    .into_iter()
                    .map(|(preference, host)| {
                        DnsRecord::new(RecordType::Mx, format!("{host} {preference}"))
                    })
                    .collect())
            }
            Err(e) => empty_or_error(domain, RecordType::Mx, e),
        }
    }
}

/// Queries the name servers of a domain.
pub struct NsLookup {
    resolver: Arc<TokioAsyncResolver>,
}

impl NsLookup {
    pub fn new(resolver: Arc<TokioAsyncResolver>) -> Self {
        Self { resolver }
    }
}

#[async_trait]
impl RecordLookup for NsLookup {
    fn record_type(&self) -> RecordType {
        RecordType::Ns
    }

    async fn lookup(&self, domain: &str) -> Result<Vec<DnsRecord>, LookupError> {
        match self.resolver.lookup(domain, ProtoRecordType::NS).await {
            Ok(lookup) => Ok(lookup
                .iter()
                .filter_map(|rdata| {
                    if let RData::NS(ns) = rdata {
                        Some(DnsRecord::new(RecordType::Ns, ns.to_utf8()))
                    } else {
                        None
                    }
                })
                .collect()),
            Err(e) => empty_or_error(domain, RecordType::Ns, e),
        }
    }
}

/// Queries service records under the configured service/protocol qualifier.
///
/// Each record reads `"<target> <port> <priority> <weight>"`.
pub struct SrvLookup {
    resolver: Arc<TokioAsyncResolver>,
    service: SrvService,
}

impl SrvLookup {
    pub fn new(resolver: Arc<TokioAsyncResolver>, service: SrvService) -> Self {
        Self { resolver, service }
    }
}

#[async_trait]
impl RecordLookup for SrvLookup {
    fn record_type(&self) -> RecordType {
        RecordType::Srv
    }

    async fn lookup(&self, domain: &str) -> Result<Vec<DnsRecord>, LookupError> {
        let name = self.service.query_name(domain);
        match self.resolver.lookup(name.as_str(), ProtoRecordType::SRV).await {
            Ok(lookup) => Ok(lookup
                .iter()
                .filter_map(|rdata| {
                    if let RData::SRV(srv) = rdata {
                        Some(DnsRecord::new(
                            RecordType::Srv,
                            format!(
                                "{} {} {} {}",
                                srv.target().to_utf8(),
                                srv.port(),
                                srv.priority(),
                                srv.weight()
                            ),
                        ))
                    } else {
                        None
                    }
                })
                .collect()),
            Err(e) => empty_or_error(&name, RecordType::Srv, e),
        }
    }
}

/// Queries text records. Each payload is wrapped in double quotes.
pub struct TxtLookup {
    resolver: Arc<TokioAsyncResolver>,
}

impl TxtLookup {
    pub fn new(resolver: Arc<TokioAsyncResolver>) -> Self {
        Self { resolver }
    }
}

/// Renders TXT character-strings as one quoted payload.
pub(crate) fn quote_txt<'a>(strings: impl IntoIterator<Item = &'a [u8]>) -> String {
    let text: String = strings
        .into_iter()
        .map(String::from_utf8_lossy)
        .collect::<Vec<_>>()
        .join("");
    format!("\"{text}\"")
}

#[async_trait]
impl RecordLookup for TxtLookup {
    fn record_type(&self) -> RecordType {
        RecordType::Txt
    }

    async fn lookup(&self, domain: &str) -> Result<Vec<DnsRecord>, LookupError> {
        match self.resolver.lookup(domain, ProtoRecordType::TXT).await {
            Ok(lookup) => Ok(lookup
                .iter()
                .filter_map(|rdata| {
                    if let RData::TXT(txt) = rdata {
                        // A TXT record can hold several character-strings; they form one value
                        Some(DnsRecord::new(
                            RecordType::Txt,
                            quote_txt(txt.iter().map(|bytes| &bytes[..])),
                        ))
                    } else {
                        None
                    }
                })
                .collect()),
            Err(e) => empty_or_error(domain, RecordType::Txt, e),
        }
    }
}
