//! DNS resolution and record querying.
//!
//! This module provides async DNS operations using `hickory-resolver`:
//! - One lookup per record type (A, AAAA, CNAME, MX, NS, PTR, SOA, SRV, TXT)
//! - A registry mapping record types to lookups
//! - The per-domain aggregator that runs every registered lookup concurrently
//!
//! SOA is queried with a hand-built message sent to a fixed server; every
//! other type goes through the system resolver configuration.

mod aggregate;
mod lookup;
mod records;
mod registry;
mod resolution;
mod soa;
mod types;

// Re-export public API
pub use aggregate::{resolve_domain, ResolveContext};
pub use lookup::RecordLookup;
pub use records::{CnameLookup, MxLookup, NsLookup, SrvLookup, TxtLookup};
pub use registry::LookupRegistry;
pub use resolution::{AddressLookup, PtrLookup};
pub use soa::{build_soa_query, parse_soa_answers, SoaLookup};
pub use types::{DnsRecord, DomainBatch, RecordType, ResolutionResult, SrvService};
