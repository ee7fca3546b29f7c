//! Singleton-property tests for `LoggerCell`.

use std::sync::Arc;
use std::thread;

use crate::error::LogError;
use crate::global::LoggerCell;
use crate::logger::Logger;
use crate::sink::{InMemorySink, LogSink};

#[test]
fn get_or_init_returns_the_same_instance_for_any_sink() {
    let cell = LoggerCell::new();

    let a = cell.get_or_init(Arc::new(InMemorySink::new("a")));
    let b = cell.get_or_init(Arc::new(InMemorySink::new("b")));

    assert!(Arc::ptr_eq(&a, &b));
    // The first sink won; the second call's argument was discarded.
    assert_eq!(a.sink().id(), "a");
}

#[test]
fn repeat_get_or_init_silently_ignores_the_new_sink() {
    let cell = LoggerCell::new();
    let first = InMemorySink::new("first");
    let second = InMemorySink::new("second");

    cell.get_or_init(Arc::new(first.clone()));
    let logger = cell.get_or_init(Arc::new(second.clone()));

    logger.info("hello").unwrap();

    assert_eq!(first.len(), 1);
    assert!(second.is_empty());
}

#[test]
fn direct_init_fails_when_occupied() {
    let cell = LoggerCell::new();
    cell.get_or_init(Arc::new(InMemorySink::new("a")));

    let err = cell
        .init(Logger::new(Arc::new(InMemorySink::new("b"))))
        .unwrap_err();

    assert!(matches!(err, LogError::AlreadyInitialized));
}

#[test]
fn init_installs_the_given_logger() {
    let cell = LoggerCell::new();
    let sink = InMemorySink::new("direct");

    let installed = cell
        .init(Logger::new(Arc::new(sink.clone())))
        .unwrap();
    let fetched = cell.get_or_init(Arc::new(InMemorySink::new("ignored")));

    assert!(Arc::ptr_eq(&installed, &fetched));
    assert_eq!(fetched.sink().id(), "direct");
}

#[test]
fn get_is_none_until_initialized() {
    let cell = LoggerCell::new();
    assert!(cell.get().is_none());
    assert!(!cell.is_initialized());

    cell.get_or_init(Arc::new(InMemorySink::new("a")));

    assert!(cell.get().is_some());
    assert!(cell.is_initialized());
}

#[test]
fn reset_allows_reinitialization() {
    let cell = LoggerCell::new();
    let before = cell.get_or_init(Arc::new(InMemorySink::new("a")));

    cell.reset();
    assert!(!cell.is_initialized());

    let after = cell.get_or_init(Arc::new(InMemorySink::new("b")));
    assert!(!Arc::ptr_eq(&before, &after));
    assert_eq!(after.sink().id(), "b");
}

#[test]
fn concurrent_get_or_init_yields_one_instance() {
    let cell = Arc::new(LoggerCell::new());

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let cell = Arc::clone(&cell);
            thread::spawn(move || cell.get_or_init(Arc::new(InMemorySink::new(format!("s-{i}")))))
        })
        .collect();

    let loggers: Vec<Arc<Logger>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for logger in &loggers[1..] {
        assert!(Arc::ptr_eq(&loggers[0], logger));
    }
}
