//! Batch orchestration.
//!
//! Fans a batch of domains out to the per-domain aggregator and waits for all
//! of them on a completion barrier before control returns to the caller.

mod batch;

pub use crate::dns::ResolveContext;
pub use batch::{resolve_batch, BatchPhase, BatchReport, Delivery, ResultSink};
