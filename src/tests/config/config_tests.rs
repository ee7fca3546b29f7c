//! Tests for `LogConfig` parsing and resolution.

use std::fs;

use crate::config::LogConfig;
use crate::sink::SinkKind;
use crate::build_logger_from_config;

#[test]
fn parse_minimal_config() {
    let yaml = r#"
sink: file
path: app.log
"#;

    let cfg: LogConfig = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(cfg.sink, "file");
    assert_eq!(cfg.path.as_deref(), Some("app.log"));
    assert_eq!(cfg.kind(), SinkKind::File);
}

#[test]
fn empty_config_defaults_to_console() {
    let cfg: LogConfig = serde_yaml::from_str("{}").unwrap();
    assert_eq!(cfg.sink, "console");
    assert!(cfg.path.is_none());
    assert_eq!(cfg.kind(), SinkKind::Console);
}

#[test]
fn unrecognized_sink_choice_falls_back_to_console() {
    let cfg = LogConfig::new().with_sink("carrier-pigeon");
    assert_eq!(cfg.kind(), SinkKind::Console);
}

#[test]
fn config_builds_a_working_file_logger() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cfg.log");

    let cfg = LogConfig::new()
        .with_sink("uppercase_file")
        .with_path(path.to_string_lossy());

    let logger = build_logger_from_config(cfg).unwrap();
    logger.info("from config").unwrap();
    drop(logger);

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.ends_with("[INFO] FROM CONFIG\n"));
}
