//! Tests for the crate error type.

use std::error::Error;
use std::io;

use crate::error::LogError;

#[test]
fn already_initialized_is_detectable_without_string_matching() {
    let err = LogError::AlreadyInitialized;
    assert!(matches!(err, LogError::AlreadyInitialized));
    assert_eq!(err.to_string(), "logger is already initialized");
}

#[test]
fn sink_error_names_the_target() {
    let err = LogError::sink(
        "app.log",
        io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
    );

    let rendered = err.to_string();
    assert!(rendered.contains("app.log"));
    assert!(rendered.contains("permission denied"));
}

#[test]
fn sink_error_exposes_its_source() {
    let err = LogError::sink("-", io::Error::new(io::ErrorKind::Other, "boom"));

    let source = err.source().expect("sink errors carry a source");
    assert_eq!(source.to_string(), "boom");
}
