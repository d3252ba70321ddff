//! File output tests for alien-logging
//!
//! Subscribers are installed per-thread with `with_default` so the tests do
//! not fight over the global dispatcher.

use std::fs;

use alien_logging::{FileConfig, LogConfig, RotationStrategy, SubscriberBuilder};

fn file_only(dir: &std::path::Path, rotation: RotationStrategy) -> LogConfig {
    LogConfig {
        default_level: "info".to_string(),
        file: Some(FileConfig {
            directory: dir.to_path_buf(),
            prefix: "aliens".to_string(),
            rotation,
        }),
        ..LogConfig::production(dir.to_path_buf())
    }
}

#[test]
fn test_single_file_receives_jsonl() {
    let dir = tempfile::tempdir().unwrap();
    let (subscriber, guard) = SubscriberBuilder::new()
        .with_config(file_only(dir.path(), RotationStrategy::Never))
        .build()
        .unwrap();

    tracing::subscriber::with_default(subscriber, || {
        tracing::info!(species = "Zentar", "served alien");
    });
    drop(guard);

    let contents = fs::read_to_string(dir.path().join("aliens.log")).unwrap();
    let line = contents.lines().next().expect("one log line");
    assert!(line.starts_with('{'), "expected JSON, got {line}");
    assert!(line.contains("served alien"));
    assert!(line.contains("\"species\":\"Zentar\""));
}

#[test]
fn test_rotating_file_created_in_directory() {
    let dir = tempfile::tempdir().unwrap();
    let (subscriber, guard) = SubscriberBuilder::new()
        .with_config(file_only(dir.path(), RotationStrategy::Daily))
        .build()
        .unwrap();

    tracing::subscriber::with_default(subscriber, || {
        tracing::warn!("habitat filter matched nothing");
    });
    drop(guard);

    let entries: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(entries.len(), 1);
    assert!(entries[0].starts_with("aliens"));
    assert!(entries[0].ends_with(".log"));
}

#[test]
fn test_below_level_is_dropped() {
    let dir = tempfile::tempdir().unwrap();
    let (subscriber, guard) = SubscriberBuilder::new()
        .with_config(file_only(dir.path(), RotationStrategy::Never))
        .with_level("warn")
        .build()
        .unwrap();

    tracing::subscriber::with_default(subscriber, || {
        tracing::info!("quiet");
        tracing::error!("loud");
    });
    drop(guard);

    let contents = fs::read_to_string(dir.path().join("aliens.log")).unwrap();
    assert!(!contents.contains("quiet"));
    assert!(contents.contains("loud"));
}
