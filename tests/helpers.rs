// Shared test helpers: scripted lookups and in-memory output.
//
// Nothing here touches the network, so results are deterministic.

use std::collections::HashMap;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use domain_records::app::SharedOutput;
use domain_records::dns::{LookupRegistry, RecordLookup, ResolveContext};
use domain_records::error_handling::{LookupError, LookupStats};
use domain_records::{DnsRecord, RecordType};

/// How a scripted lookup answers for one domain.
#[derive(Clone)]
#[allow(dead_code)] // Not every test file uses every behavior
pub enum Answer {
    Records(Vec<&'static str>),
    Fail,
    Hang,
    Delayed(Duration, Vec<&'static str>),
}

/// A lookup whose answer depends on the domain. Unknown domains get no records.
#[allow(dead_code)]
pub struct ScriptedLookup {
    record_type: RecordType,
    answers: HashMap<String, Answer>,
}

#[allow(dead_code)]
impl ScriptedLookup {
    pub fn new(record_type: RecordType) -> Self {
        Self {
            record_type,
            answers: HashMap::new(),
        }
    }

    pub fn answer(mut self, domain: &str, answer: Answer) -> Self {
        self.answers.insert(domain.to_string(), answer);
        self
    }
}

#[async_trait]
impl RecordLookup for ScriptedLookup {
    fn record_type(&self) -> RecordType {
        self.record_type
    }

    async fn lookup(&self, domain: &str) -> Result<Vec<DnsRecord>, LookupError> {
        let to_records = |data: &[&'static str]| {
            data.iter()
                .map(|d| DnsRecord::new(self.record_type, *d))
                .collect::<Vec<_>>()
        };
        match self.answers.get(domain) {
            None => Ok(Vec::new()),
            Some(Answer::Records(data)) => Ok(to_records(data)),
            Some(Answer::Fail) => Err(LookupError::Io(io::Error::new(
                io::ErrorKind::ConnectionRefused,
                "connection refused",
            ))),
            Some(Answer::Hang) => std::future::pending().await,
            Some(Answer::Delayed(delay, data)) => {
                tokio::time::sleep(*delay).await;
                Ok(to_records(data))
            }
        }
    }
}

/// Wraps a registry into a resolve context with the given per-lookup deadline.
#[allow(dead_code)]
pub fn test_context(registry: LookupRegistry, timeout: Duration) -> Arc<ResolveContext> {
    Arc::new(ResolveContext::new(
        registry,
        timeout,
        Arc::new(LookupStats::new()),
    ))
}

/// Writer that appends to a shared buffer.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

#[allow(dead_code)]
impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

    pub fn as_output(&self) -> SharedOutput {
        Arc::new(Mutex::new(Box::new(self.clone())))
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
