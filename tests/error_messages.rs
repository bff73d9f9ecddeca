//! Tests to ensure error messages tell the user what to fix

use domain_records::dns::SrvService;
use domain_records::error_handling::{ConfigError, ExportError};
use domain_records::export::export_csv;
use domain_records::RecordType;
use tempfile::TempDir;

#[test]
fn test_srv_service_error_shows_expected_form() {
    let err = "sip".parse::<SrvService>().unwrap_err();
    assert_eq!(err, ConfigError::InvalidSrvService("sip".to_string()));
    let message = err.to_string();
    assert!(message.contains("'sip'"), "should echo the input: {message}");
    assert!(message.contains("_service._proto"), "should show the form: {message}");
}

#[test]
fn test_unknown_record_type_names_the_code() {
    let err = RecordType::parse_code(" AXFR ").unwrap_err();
    assert_eq!(err.to_string(), "unknown record type 'AXFR'");
}

#[test]
fn test_unusable_file_name_names_the_domain() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let err = export_csv(dir.path(), "../escape", &["A 192.0.2.1"]).unwrap_err();
    assert!(matches!(err, ExportError::InvalidFileName(_)));
    assert_eq!(err.to_string(), "'../escape' cannot be used as a file name");
}
