//! DNS resolver initialization.
//!
//! This module provides functions to initialize the DNS resolver with proper
//! timeout configuration.

use std::sync::Arc;
use std::time::Duration;

use hickory_resolver::config::{LookupIpStrategy, ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;

use crate::config::DNS_ATTEMPTS;
use crate::error_handling::InitializationError;

/// Resolver options shared by the system and fallback configurations.
pub(crate) fn resolver_opts(timeout: Duration) -> ResolverOpts {
    let mut opts = ResolverOpts::default();
    opts.timeout = timeout;
    opts.attempts = DNS_ATTEMPTS;
    // Names are looked up as given; no search-domain expansion
    opts.ndots = 0;
    // A and AAAA are both queried; each address lookup keeps its own family
    opts.ip_strategy = LookupIpStrategy::Ipv4AndIpv6;
    // Every lookup is fresh
    opts.cache_size = 0;
    opts
}

/// Initializes the system DNS resolver used by every lookup except SOA.
///
/// Reads the system configuration (`/etc/resolv.conf` on Unix). If it cannot
/// be read, falls back to hickory's default upstreams (Google Public DNS)
/// with a warning.
///
/// # Returns
///
/// A configured `TokioAsyncResolver` wrapped in `Arc` for sharing across tasks.
///
/// # Errors
///
/// Returns `InitializationError::DnsResolverError` if `timeout` is zero.
pub fn init_resolver(timeout: Duration) -> Result<Arc<TokioAsyncResolver>, InitializationError> {
    if timeout.is_zero() {
        return Err(InitializationError::DnsResolverError(
            "resolver timeout must be greater than zero".to_string(),
        ));
    }

    let opts = resolver_opts(timeout);
    let config = match hickory_resolver::system_conf::read_system_conf() {
        Ok((config, _system_opts)) => config,
        Err(e) => {
            log::warn!("Failed to read system DNS configuration ({e}), using default resolvers");
            ResolverConfig::default()
        }
    };

    Ok(Arc::new(TokioAsyncResolver::tokio(config, opts)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolver_opts() {
        let opts = resolver_opts(Duration::from_secs(3));
        assert_eq!(opts.timeout, Duration::from_secs(3));
        assert_eq!(opts.attempts, DNS_ATTEMPTS);
        assert_eq!(opts.ndots, 0);
        assert_eq!(opts.ip_strategy, LookupIpStrategy::Ipv4AndIpv6);
    }

    #[tokio::test]
    async fn test_init_resolver_rejects_zero_timeout() {
        let result = init_resolver(Duration::ZERO);
        assert!(matches!(
            result,
            Err(InitializationError::DnsResolverError(_))
        ));
    }

    #[tokio::test]
    async fn test_init_resolver_succeeds() {
        assert!(init_resolver(Duration::from_secs(1)).is_ok());
    }
}
