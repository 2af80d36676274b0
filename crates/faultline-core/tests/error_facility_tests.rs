#![allow(clippy::unwrap_used, clippy::expect_used)]

use faultline_core::errors::{ExError, ExErrorKind, FaultlineError};

#[test]
fn test_already_initialized_verifiable_by_kind() {
    let ex_err: ExError = FaultlineError::AlreadyInitialized.into();

    assert_eq!(ex_err.kind(), ExErrorKind::AlreadyInitialized);
    assert_eq!(ex_err.code(), "ERR_ALREADY_INITIALIZED");
    assert_eq!(ex_err.op(), Some("init"));
    assert_eq!(ex_err.message(), "logger already initialized");
}

#[test]
fn test_backend_init_conversion() {
    let err = FaultlineError::BackendInit {
        reason: "connection refused".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::BackendInit);
    assert_eq!(ex_err.code(), "ERR_BACKEND_INIT");
    assert!(ex_err.message().contains("connection refused"));
}

#[test]
fn test_invalid_dsn_conversion() {
    let err = FaultlineError::InvalidDsn {
        reason: "missing host".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::InvalidDsn);
    assert_eq!(ex_err.op(), Some("parse_dsn"));
    assert_eq!(ex_err.to_string(), "[ERR_INVALID_DSN] in operation 'parse_dsn': invalid DSN: missing host");
}

#[test]
fn test_config_conversion_names_key() {
    let err = FaultlineError::Config {
        key: "FAULTLINE_DSN".to_string(),
        reason: "value is not valid unicode".to_string(),
    };

    assert_eq!(err.kind(), ExErrorKind::Config);
    let ex_err: ExError = err.into();
    assert!(ex_err.message().contains("FAULTLINE_DSN"));
}

#[test]
fn test_error_kind_code_mapping() {
    let kinds = vec![
        (ExErrorKind::AlreadyInitialized, "ERR_ALREADY_INITIALIZED"),
        (ExErrorKind::BackendInit, "ERR_BACKEND_INIT"),
        (ExErrorKind::InvalidDsn, "ERR_INVALID_DSN"),
        (ExErrorKind::Config, "ERR_CONFIG"),
    ];

    for (kind, expected_code) in kinds {
        assert_eq!(kind.code(), expected_code);
    }
}

#[test]
fn test_invalid_dsn_surfaces_as_backend_init() {
    let err = FaultlineError::InvalidDsn {
        reason: "bad".to_string(),
    }
    .into_backend_init();

    assert_eq!(err.kind(), ExErrorKind::BackendInit);
}
