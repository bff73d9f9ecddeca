//! Registry of record-type lookups.
//!
//! The registry is the single place that maps a [`RecordType`] to the lookup
//! that resolves it. The aggregator fans out over whatever is registered.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use hickory_resolver::TokioAsyncResolver;

use super::lookup::RecordLookup;
use super::records::{CnameLookup, MxLookup, NsLookup, SrvLookup, TxtLookup};
use super::resolution::{AddressLookup, PtrLookup};
use super::soa::SoaLookup;
use super::types::RecordType;
use crate::config::Config;

/// Mapping from record type to the lookup that resolves it.
#[derive(Clone, Default)]
pub struct LookupRegistry {
    lookups: BTreeMap<RecordType, Arc<dyn RecordLookup>>,
}

impl LookupRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the registry for the configured record types.
    ///
    /// Every type except SOA is answered by `resolver`; SOA goes to
    /// `config.soa_server`. SRV needs `config.srv_service` and is left out
    /// (with a warning) when none is configured.
    pub fn from_config(config: &Config, resolver: Arc<TokioAsyncResolver>) -> Self {
        let mut registry = Self::new();
        for record_type in &config.record_types {
            let lookup: Arc<dyn RecordLookup> = match record_type {
                RecordType::A => Arc::new(AddressLookup::ipv4(Arc::clone(&resolver))),
                RecordType::Aaaa => Arc::new(AddressLookup::ipv6(Arc::clone(&resolver))),
                RecordType::Cname => Arc::new(CnameLookup::new(Arc::clone(&resolver))),
                RecordType::Mx => Arc::new(MxLookup::new(Arc::clone(&resolver))),
                RecordType::Ns => Arc::new(NsLookup::new(Arc::clone(&resolver))),
                RecordType::Ptr => Arc::new(PtrLookup::new(Arc::clone(&resolver))),
                RecordType::Soa => Arc::new(SoaLookup::new(config.soa_server)),
                RecordType::Srv => match &config.srv_service {
                    Some(service) => {
                        Arc::new(SrvLookup::new(Arc::clone(&resolver), service.clone()))
                    }
                    None => {
                        log::warn!(
                            "SRV lookups skipped: no --srv-service given (e.g. --srv-service _sip._tcp)"
                        );
                        continue;
                    }
                },
                RecordType::Txt => Arc::new(TxtLookup::new(Arc::clone(&resolver))),
            };
            registry.register(lookup);
        }
        registry
    }

    /// Registers `lookup` under its record type, returning the lookup it replaced.
    pub fn register(&mut self, lookup: Arc<dyn RecordLookup>) -> Option<Arc<dyn RecordLookup>> {
        self.lookups.insert(lookup.record_type(), lookup)
    }

    /// Builder form of [`register`](Self::register).
    pub fn with(mut self, lookup: impl RecordLookup + 'static) -> Self {
        self.register(Arc::new(lookup));
        self
    }

    pub fn get(&self, record_type: RecordType) -> Option<&Arc<dyn RecordLookup>> {
        self.lookups.get(&record_type)
    }

    /// Keeps only the lookups for `record_types`.
    pub fn retain(&mut self, record_types: &[RecordType]) {
        self.lookups.retain(|t, _| record_types.contains(t));
    }

    /// Registered record types in canonical order.
    pub fn record_types(&self) -> impl Iterator<Item = RecordType> + '_ {
        self.lookups.keys().copied()
    }

    pub fn lookups(&self) -> impl Iterator<Item = &Arc<dyn RecordLookup>> {
        self.lookups.values()
    }

    pub fn len(&self) -> usize {
        self.lookups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lookups.is_empty()
    }
}

impl fmt::Debug for LookupRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.lookups.keys()).finish()
    }
}
