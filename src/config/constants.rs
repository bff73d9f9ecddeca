//! Configuration constants.
//!
//! This module defines the defaults used when options are not given on the
//! command line.

/// Domain resolved when the user submits an empty domain list.
pub const DEFAULT_DOMAIN: &str = "erikbjerke.com";

/// Resolver queried directly for SOA records.
pub const DEFAULT_SOA_SERVER: &str = "8.8.8.8:53";

/// Per-lookup deadline in seconds.
/// Covers the whole lookup including resolver retries, so it should stay
/// above `DNS_TIMEOUT_SECS * DNS_ATTEMPTS`.
pub const LOOKUP_TIMEOUT_SECS: u64 = 10;

/// DNS query timeout in seconds (per attempt, system resolver)
pub const DNS_TIMEOUT_SECS: u64 = 3;

/// Attempts per query made by the system resolver before it gives up
pub const DNS_ATTEMPTS: usize = 2;

/// Largest DNS message accepted over UDP for the SOA query
pub const MAX_UDP_RESPONSE_SIZE: usize = 4096;

/// Command that ends the interactive session (case-insensitive).
pub const EXIT_COMMAND: &str = "exit";

/// Header row of exported CSV files.
pub const CSV_HEADER: [&str; 2] = ["Record Type", "Value"];
