//! Tests for the uppercasing file sink.

use std::fs;

use crate::sink::{FileSink, LogSink, UppercaseFileSink};

#[test]
fn uppercase_sink_transforms_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let upper_path = dir.path().join("upper.log");
    let plain_path = dir.path().join("plain.log");

    let upper = UppercaseFileSink::create(upper_path.clone()).unwrap();
    let plain = FileSink::create(plain_path.clone()).unwrap();

    upper.log("abc Def 123").unwrap();
    plain.log("abc Def 123").unwrap();

    assert_eq!(fs::read_to_string(&upper_path).unwrap(), "ABC DEF 123\n");
    // The plain file sink receives the untransformed line.
    assert_eq!(fs::read_to_string(&plain_path).unwrap(), "abc Def 123\n");
}

#[test]
fn uppercase_sink_case_folds_unicode() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("upper.log");

    let sink = UppercaseFileSink::create(path.clone()).unwrap();
    sink.log("grüß dich").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "GRÜSS DICH\n");
}

#[test]
fn uppercase_sink_delegates_id_and_close() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("upper.log");

    let sink = UppercaseFileSink::create(path.clone()).unwrap();
    assert_eq!(sink.id(), path.to_string_lossy());
    assert_eq!(sink.path(), path.as_path());

    sink.close().unwrap();
    assert!(sink.log("after close").is_err());
}

#[test]
fn uppercase_sink_wraps_an_existing_file_sink() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("upper.log");

    let inner = FileSink::create(path.clone()).unwrap();
    let sink = UppercaseFileSink::from_inner(inner);
    sink.log("wrapped").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "WRAPPED\n");
}
