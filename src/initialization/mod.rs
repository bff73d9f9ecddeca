//! Application initialization and resource setup.
//!
//! This module provides functions to initialize shared resources:
//! - Logger
//! - DNS resolver
//! - Lookup registry and resolve context
//! - Colored output
//!
//! All initialization functions return proper error types for error handling.

mod logger;
mod resolver;

use std::io::IsTerminal;
use std::sync::Arc;

use crate::config::Config;
use crate::dns::LookupRegistry;
use crate::error_handling::{InitializationError, LookupStats};
use crate::run::ResolveContext;

// Re-export public API
pub use logger::init_logger_with;
pub use resolver::init_resolver;
pub(crate) use resolver::resolver_opts;

/// Enables or disables colored terminal output.
///
/// Colors are off when `no_color` is set or stdout is not a terminal.
pub fn init_color_output(no_color: bool) {
    let enabled = !no_color && std::io::stdout().is_terminal();
    colored::control::set_override(enabled);
}

/// Builds the shared resolve context from the configuration.
///
/// Initializes the system resolver, registers one lookup per configured record
/// type, and creates the session-wide lookup statistics.
///
/// # Errors
///
/// Returns `InitializationError::DnsResolverError` if the resolver cannot be
/// created or no record type is left to resolve.
pub fn init_resolve_context(config: &Config) -> Result<Arc<ResolveContext>, InitializationError> {
    let resolver = init_resolver(config.dns_timeout())?;
    let registry = LookupRegistry::from_config(config, resolver);
    if registry.is_empty() {
        return Err(InitializationError::DnsResolverError(
            "no record types to resolve".to_string(),
        ));
    }
    log::debug!(
        "Resolving record types: {}",
        registry
            .record_types()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );

    Ok(Arc::new(ResolveContext::new(
        registry,
        config.lookup_timeout(),
        Arc::new(LookupStats::new()),
    )))
}
