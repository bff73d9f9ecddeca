//! domain_records library: concurrent DNS record collection
//!
//! This library resolves every common DNS record type (A, AAAA, CNAME, MX,
//! NS, PTR, SOA, SRV, TXT) for a batch of domains. Each record type is looked
//! up on its own task and each domain on its own task; a failing lookup only
//! costs its own records.
//!
//! # Example
//!
//! ```no_run
//! use domain_records::dns::resolve_domain;
//! use domain_records::initialization::init_resolve_context;
//! use domain_records::Config;
//! use tokio_util::sync::CancellationToken;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let ctx = init_resolve_context(&config)?;
//!
//! let result = resolve_domain("example.com", &ctx, &CancellationToken::new()).await;
//! for record in &result.records {
//!     println!("{record}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod app;
pub mod config;
pub mod dns;
pub mod error_handling;
pub mod export;
pub mod initialization;
pub mod run;

// Re-export public API
pub use config::{Config, ExportMode, LogFormat, LogLevel};
pub use dns::{DnsRecord, DomainBatch, RecordType, ResolutionResult};
pub use run::{resolve_batch, BatchReport, ResolveContext};
