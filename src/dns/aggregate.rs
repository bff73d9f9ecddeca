//! Per-domain fan-out over every registered lookup.
//!
//! One task is spawned per record type. Tasks that find records publish them
//! as a single message on an unbounded queue; tasks that fail, time out, are
//! cancelled or find nothing publish nothing. The aggregator drains the queue
//! until every task has dropped its sender.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use super::lookup::RecordLookup;
use super::registry::LookupRegistry;
use super::types::{DnsRecord, ResolutionResult};
use crate::error_handling::{LookupError, LookupOutcome, LookupStats};

/// Shared state for resolving domains: what to look up, how long a lookup
/// may take, and where outcomes are counted.
#[derive(Debug)]
pub struct ResolveContext {
    pub registry: LookupRegistry,
    pub lookup_timeout: Duration,
    pub stats: Arc<LookupStats>,
}

impl ResolveContext {
    pub fn new(registry: LookupRegistry, lookup_timeout: Duration, stats: Arc<LookupStats>) -> Self {
        Self {
            registry,
            lookup_timeout,
            stats,
        }
    }
}

/// Runs one lookup under its deadline and the batch cancellation token.
async fn run_lookup(
    lookup: &dyn RecordLookup,
    domain: &str,
    timeout: Duration,
    cancel: &CancellationToken,
) -> Result<Vec<DnsRecord>, (LookupOutcome, Option<LookupError>)> {
    tokio::select! {
        _ = cancel.cancelled() => Err((LookupOutcome::Cancelled, None)),
        result = tokio::time::timeout(timeout, lookup.lookup(domain)) => match result {
            Ok(Ok(records)) => Ok(records),
            Ok(Err(e)) => Err((LookupOutcome::Failed, Some(e))),
            Err(_) => Err((LookupOutcome::TimedOut, Some(LookupError::Timeout(timeout)))),
        },
    }
}

/// Resolves every registered record type for `domain`.
///
/// Individual lookup failures never surface here: a failed, timed-out or
/// cancelled lookup contributes no records and is only counted. The returned
/// records are in completion order, with each lookup's records adjacent.
pub async fn resolve_domain(
    domain: &str,
    ctx: &ResolveContext,
    cancel: &CancellationToken,
) -> ResolutionResult {
    let started = Instant::now();
    let domain_shared: Arc<str> = Arc::from(domain);
    let failed = Arc::new(AtomicUsize::new(0));
    let (tx, mut rx) = mpsc::unbounded_channel::<Vec<DnsRecord>>();

    for lookup in ctx.registry.lookups() {
        let tx = tx.clone();
        let lookup = Arc::clone(lookup);
        let domain = Arc::clone(&domain_shared);
        let stats = Arc::clone(&ctx.stats);
        let failed = Arc::clone(&failed);
        let cancel = cancel.clone();
        let timeout = ctx.lookup_timeout;

        tokio::spawn(async move {
            let record_type = lookup.record_type();
            match run_lookup(lookup.as_ref(), &domain, timeout, &cancel).await {
                Ok(records) if records.is_empty() => {
                    log::debug!("{record_type} lookup for {domain}: no records");
                    stats.record(record_type, LookupOutcome::Empty);
                }
                Ok(records) => {
                    log::debug!(
                        "{record_type} lookup for {domain}: {} record(s)",
                        records.len()
                    );
                    stats.record(record_type, LookupOutcome::Records);
                    // The receiver only goes away if the aggregator itself was dropped
                    let _ = tx.send(records);
                }
                Err((outcome, error)) => {
                    match error {
                        Some(e) => log::debug!("{record_type} lookup for {domain} {outcome}: {e}"),
                        None => log::debug!("{record_type} lookup for {domain} {outcome}"),
                    }
                    stats.record(record_type, outcome);
                    if outcome.is_failure() {
                        failed.fetch_add(1, Ordering::SeqCst);
                    }
                }
            }
        });
    }
    drop(tx);

    let mut result = ResolutionResult::new(domain);
    while let Some(batch) = rx.recv().await {
        result.records.extend(batch);
    }
    result.failed_lookups = failed.load(Ordering::SeqCst);

    log::info!(
        "Resolved {} record(s) for {} in {:.2}s ({} lookup(s) failed)",
        result.len(),
        domain,
        started.elapsed().as_secs_f64(),
        result.failed_lookups
    );
    result
}
