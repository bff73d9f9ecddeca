//! Tests for command-line parsing.

use std::path::PathBuf;

use clap::Parser;
use domain_records::{Config, ExportMode, RecordType};

#[test]
fn test_no_arguments_starts_interactive_session() {
    let config = Config::try_parse_from(["domain_records"]).unwrap();
    assert!(config.domains.is_none());
    assert_eq!(config.default_domain, "erikbjerke.com");
    assert_eq!(config.record_types, RecordType::ALL.to_vec());
    assert_eq!(config.export, ExportMode::Ask);
    assert_eq!(config.output_dir, PathBuf::from("."));
}

#[test]
fn test_one_shot_arguments() {
    let config = Config::try_parse_from([
        "domain_records",
        "example.com,rust-lang.org",
        "--export",
        "all",
        "--record-types",
        "a,Mx,TXT",
        "--srv-service",
        "_sip._tcp",
        "--output-dir",
        "/tmp/records",
    ])
    .unwrap();

    assert_eq!(config.domains.as_deref(), Some("example.com,rust-lang.org"));
    assert_eq!(config.export, ExportMode::All);
    assert_eq!(
        config.record_types,
        vec![RecordType::A, RecordType::Mx, RecordType::Txt]
    );
    assert_eq!(
        config.srv_service.map(|s| s.query_name("example.com")),
        Some("_sip._tcp.example.com".to_string())
    );
    assert_eq!(config.output_dir, PathBuf::from("/tmp/records"));
}

#[test]
fn test_invalid_arguments_are_rejected() {
    for args in [
        vec!["domain_records", "--record-types", "A,BOGUS"],
        vec!["domain_records", "--srv-service", "sip.tcp"],
        vec!["domain_records", "--export", "sometimes"],
        vec!["domain_records", "--soa-server", "not-an-address"],
    ] {
        assert!(
            Config::try_parse_from(&args).is_err(),
            "{args:?} should be rejected"
        );
    }
}
