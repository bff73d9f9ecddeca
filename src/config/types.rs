//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_DOMAIN, DEFAULT_SOA_SERVER, DNS_TIMEOUT_SECS, LOOKUP_TIMEOUT_SECS,
};
use crate::dns::{RecordType, SrvService};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Whether resolved records are saved to CSV.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportMode {
    /// Ask for every domain (default)
    Ask,
    /// Save every domain without asking
    All,
    /// Never save
    None,
}

/// Application configuration.
///
/// Parsed from the command line by `clap`, or built programmatically via
/// `Default`.
///
/// # Examples
///
/// ```bash
/// # Interactive session
/// domain_records
///
/// # Resolve two domains once, save both to CSV, and exit
/// domain_records example.com,rust-lang.org --export all
///
/// # Only address and mail records, SRV for SIP over TCP
/// domain_records --record-types a,aaaa,mx,srv --srv-service _sip._tcp
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "domain_records",
    version,
    about = "Resolves every common DNS record type for a list of domains."
)]
pub struct Config {
    /// Comma-separated domains to resolve once (interactive session if omitted)
    pub domains: Option<String>,

    /// Domain resolved when the submitted list is empty
    #[arg(long, default_value = DEFAULT_DOMAIN)]
    pub default_domain: String,

    /// Record types to resolve, comma-separated
    #[arg(
        long,
        value_delimiter = ',',
        value_parser = RecordType::parse_code,
        default_value = "A,AAAA,CNAME,MX,NS,PTR,SOA,SRV,TXT"
    )]
    pub record_types: Vec<RecordType>,

    /// SRV service and protocol to query, e.g. _sip._tcp (SRV is skipped if unset)
    #[arg(long)]
    pub srv_service: Option<SrvService>,

    /// Resolver queried directly for SOA records
    #[arg(long, default_value = DEFAULT_SOA_SERVER)]
    pub soa_server: SocketAddr,

    /// Deadline for a single record-type lookup, in seconds
    #[arg(
        long,
        default_value_t = LOOKUP_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub lookup_timeout_secs: u64,

    /// Per-attempt timeout of the system resolver, in seconds
    #[arg(
        long,
        default_value_t = DNS_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub dns_timeout_secs: u64,

    /// Directory CSV files are written to
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Save results to CSV: ask|all|none
    #[arg(long, value_enum, default_value_t = ExportMode::Ask)]
    pub export: ExportMode,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Config {
    /// Deadline applied to every record-type lookup.
    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_secs(self.lookup_timeout_secs)
    }

    /// Per-attempt timeout of the system resolver.
    pub fn dns_timeout(&self) -> Duration {
        Duration::from_secs(self.dns_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            domains: None,
            default_domain: DEFAULT_DOMAIN.to_string(),
            record_types: RecordType::ALL.to_vec(),
            srv_service: None,
            soa_server: DEFAULT_SOA_SERVER
                .parse()
                .unwrap_or_else(|_| SocketAddr::from(([8, 8, 8, 8], 53))),
            lookup_timeout_secs: LOOKUP_TIMEOUT_SECS,
            dns_timeout_secs: DNS_TIMEOUT_SECS,
            output_dir: PathBuf::from("."),
            export: ExportMode::Ask,
            no_color: false,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_parse_defaults_match_default_impl() {
        let parsed = Config::try_parse_from(["domain_records"]).unwrap();
        let default = Config::default();
        assert_eq!(parsed.domains, default.domains);
        assert_eq!(parsed.default_domain, default.default_domain);
        assert_eq!(parsed.record_types, default.record_types);
        assert_eq!(parsed.srv_service, default.srv_service);
        assert_eq!(parsed.soa_server, default.soa_server);
        assert_eq!(parsed.lookup_timeout_secs, default.lookup_timeout_secs);
        assert_eq!(parsed.dns_timeout_secs, default.dns_timeout_secs);
        assert_eq!(parsed.output_dir, default.output_dir);
        assert_eq!(parsed.export, default.export);
        assert!(!parsed.no_color);
    }

    #[test]
    fn test_parse_record_type_subset() {
        let parsed =
            Config::try_parse_from(["domain_records", "--record-types", "a,mx,Txt"]).unwrap();
        assert_eq!(
            parsed.record_types,
            vec![RecordType::A, RecordType::Mx, RecordType::Txt]
        );
    }

    #[test]
    fn test_parse_rejects_unknown_record_type() {
        let result = Config::try_parse_from(["domain_records", "--record-types", "a,caa"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_srv_service() {
        let parsed =
            Config::try_parse_from(["domain_records", "--srv-service", "_sip._tcp"]).unwrap();
        assert_eq!(
            parsed.srv_service.map(|s| s.to_string()),
            Some("_sip._tcp".to_string())
        );

        let result = Config::try_parse_from(["domain_records", "--srv-service", "sip"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_rejects_zero_timeouts() {
        for flag in ["--lookup-timeout-secs", "--dns-timeout-secs"] {
            let result = Config::try_parse_from(["domain_records", flag, "0"]);
            assert!(result.is_err(), "{flag} 0 should be rejected");

            let parsed = Config::try_parse_from(["domain_records", flag, "1"]).unwrap();
            assert_eq!(parsed.lookup_timeout_secs.min(parsed.dns_timeout_secs), 1);
        }
    }

    #[test]
    fn test_parse_one_shot_domains_and_export() {
        let parsed = Config::try_parse_from([
            "domain_records",
            "example.com,rust-lang.org",
            "--export",
            "all",
            "--lookup-timeout-secs",
            "4",
        ])
        .unwrap();
        assert_eq!(parsed.domains.as_deref(), Some("example.com,rust-lang.org"));
        assert_eq!(parsed.export, ExportMode::All);
        assert_eq!(parsed.lookup_timeout(), Duration::from_secs(4));
    }
}
