//! Multi-domain batch resolution.
//!
//! Every domain of a batch is resolved on its own task. Each result is handed
//! to the [`ResultSink`] as soon as it is ready; the batch returns once every
//! domain task has finished.

use std::fmt;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;

use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::dns::{resolve_domain, DomainBatch, ResolutionResult, ResolveContext};
use crate::error_handling::ExportError;

/// What happened when a result was delivered.
#[derive(Debug)]
pub enum Delivery {
    /// Shown only
    Displayed,
    /// Shown and saved to the given file
    Exported(PathBuf),
    /// Shown, but saving failed
    ExportFailed(ExportError),
}

/// Consumer of per-domain results.
///
/// Called from the domain's task as soon as its result is ready, so calls for
/// different domains may overlap.
pub trait ResultSink: Send + Sync {
    fn deliver(&self, result: &ResolutionResult) -> Delivery;
}

/// Lifecycle of one batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchPhase {
    Idle,
    /// Domain tasks are being spawned
    Dispatching { domains: usize },
    /// Waiting for the remaining domain tasks
    Draining { pending: usize },
    Complete,
}

impl fmt::Display for BatchPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchPhase::Idle => f.write_str("idle"),
            BatchPhase::Dispatching { domains } => write!(f, "dispatching {domains} domain(s)"),
            BatchPhase::Draining { pending } => write!(f, "draining ({pending} pending)"),
            BatchPhase::Complete => f.write_str("complete"),
        }
    }
}

fn advance(phase: &mut BatchPhase, next: BatchPhase) {
    log::debug!("Batch {phase} -> {next}");
    *phase = next;
}

/// Summary of a finished batch.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchReport {
    pub domains: usize,
    pub records: usize,
    pub exported: usize,
    pub export_failures: usize,
    pub failed_lookups: usize,
    pub cancelled: bool,
    pub phase: BatchPhase,
    pub elapsed_seconds: f64,
}

#[derive(Default)]
struct BatchCounters {
    records: AtomicUsize,
    exported: AtomicUsize,
    export_failures: AtomicUsize,
    failed_lookups: AtomicUsize,
}

/// Resolves every domain of `batch` concurrently.
///
/// Results reach `sink` in completion order, independent of each other. The
/// function returns after all domain tasks have been joined, whether they found
/// records or not. Cancelling `cancel` stops every pending lookup; the batch
/// then completes with whatever was resolved.
pub async fn resolve_batch(
    batch: &DomainBatch,
    ctx: Arc<ResolveContext>,
    sink: Arc<dyn ResultSink>,
    cancel: CancellationToken,
) -> BatchReport {
    let started = Instant::now();
    let mut phase = BatchPhase::Idle;
    let counters = Arc::new(BatchCounters::default());

    advance(
        &mut phase,
        BatchPhase::Dispatching {
            domains: batch.len(),
        },
    );
    let mut tasks = JoinSet::new();
    for domain in batch.domains() {
        let domain = domain.clone();
        let ctx = Arc::clone(&ctx);
        let sink = Arc::clone(&sink);
        let counters = Arc::clone(&counters);
        let cancel = cancel.clone();

        tasks.spawn(async move {
            let result = resolve_domain(&domain, &ctx, &cancel).await;
            counters
                .records
                .fetch_add(result.len(), Ordering::SeqCst);
            counters
                .failed_lookups
                .fetch_add(result.failed_lookups, Ordering::SeqCst);

            match sink.deliver(&result) {
                Delivery::Displayed => {}
                Delivery::Exported(path) => {
                    log::info!("Saved {} to {}", domain, path.display());
                    counters.exported.fetch_add(1, Ordering::SeqCst);
                }
                Delivery::ExportFailed(e) => {
                    log::warn!("Failed to save {domain}: {e}");
                    counters.export_failures.fetch_add(1, Ordering::SeqCst);
                }
            }
            domain
        });
    }

    advance(
        &mut phase,
        BatchPhase::Draining {
            pending: tasks.len(),
        },
    );
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(domain) => log::debug!("Finished {domain}, {} domain(s) pending", tasks.len()),
            Err(e) => log::error!("Domain task failed: {e}"),
        }
    }
    advance(&mut phase, BatchPhase::Complete);

    BatchReport {
        domains: batch.len(),
        records: counters.records.load(Ordering::SeqCst),
        exported: counters.exported.load(Ordering::SeqCst),
        export_failures: counters.export_failures.load(Ordering::SeqCst),
        failed_lookups: counters.failed_lookups.load(Ordering::SeqCst),
        cancelled: cancel.is_cancelled(),
        phase,
        elapsed_seconds: started.elapsed().as_secs_f64(),
    }
}
