// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fs;

use rand::Rng;
use tempfile::TempDir;
use tierlog::ErrorKind;
use tierlog::LeveledLogger;
use tierlog::Severity;
use tierlog::sink::Buffer;
use tierlog::sink::Destination;

fn emit(logger: &LeveledLogger, severity: Severity, message: &str) {
    match severity {
        Severity::Error => logger.error(message),
        Severity::Info => logger.info(message),
        Severity::Debug => logger.debug(message),
        other => unreachable!("{other} is not emitted here"),
    }
}

#[test]
fn test_every_sink_gets_the_same_decision() {
    let mut rng = rand::rng();

    for _ in 0..200 {
        let first = Buffer::default();
        let second = Buffer::default();
        let threshold = Severity::try_from(rng.random_range(0..=4u8)).unwrap();
        let logger = tierlog::builder("core")
            .threshold(threshold)
            .sink(first.clone())
            .sink(second.clone())
            .build()
            .unwrap();

        let severity = Severity::try_from(rng.random_range(2..=4u8)).unwrap();
        emit(&logger, severity, "message");

        let expected = usize::from(severity <= threshold);
        assert_eq!(first.lines().len(), expected, "{severity} at {threshold}");
        assert_eq!(first.contents(), second.contents());
    }
}

#[test]
fn test_threshold_change_only_affects_later_emissions() {
    let buffer = Buffer::default();
    let logger = tierlog::builder("core")
        .threshold(Severity::Debug)
        .sink(buffer.clone())
        .build()
        .unwrap();

    logger.debug("before");
    logger.set_threshold(Severity::Error);
    logger.debug("after");
    logger.error("still");

    let lines = buffer.lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("before"));
    assert!(lines[1].ends_with("still"));
}

#[test]
fn test_rejected_tag_keeps_old_tag() {
    let buffer = Buffer::default();
    let logger = tierlog::builder("core")
        .sink(buffer.clone())
        .build()
        .unwrap();

    let err = logger.set_component_tag("").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    logger.info("after rejection");

    assert!(buffer.contents().contains("[core] after rejection"));
}

#[test]
fn test_no_sinks_is_valid_and_silent() {
    let logger = LeveledLogger::new(false, "", "core", Severity::Debug).unwrap();
    logger.error("nowhere");
    logger.info("nowhere");
    logger.debug_ln(&[&"nowhere", &"at", &"all"]);
    logger.flush().unwrap();

    let previous = logger.set_destination(Destination::new());
    assert!(previous.is_empty());
}

#[test]
fn test_unwritable_path_fails_construction() {
    let dir = TempDir::new().unwrap();

    // a directory cannot be opened for appending
    let err = LeveledLogger::new(false, dir.path(), "core", Severity::Info).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);

    // neither can a path below a regular file
    let file = dir.path().join("regular");
    fs::write(&file, "").unwrap();
    let err = LeveledLogger::new(true, file.join("app.log"), "core", Severity::Info).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
    assert!(err.to_string().contains("regular"), "{err}");
}

#[test]
fn test_file_receives_only_passing_lines() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("core.log");
    let logger = LeveledLogger::new(false, &path, "core", Severity::Error).unwrap();

    logger.error("boom");
    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 1);
    assert!(content.contains("boom"));

    logger.info("ignored");
    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 1);
}

#[test]
fn test_file_is_appended_across_loggers() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("shared.log");

    let first = LeveledLogger::new(false, &path, "first", Severity::Info).unwrap();
    let second = LeveledLogger::new(false, &path, "second", Severity::Info).unwrap();
    first.info("one");
    second.info("two");
    first.info("three");
    drop((first, second));

    let content = fs::read_to_string(&path).unwrap();
    let lines = content.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].ends_with("[first] one"));
    assert!(lines[1].ends_with("[second] two"));
    assert!(lines[2].ends_with("[first] three"));
}

#[test]
fn test_line_shape() {
    let buffer = Buffer::default();
    let logger = tierlog::builder("core")
        .sink(buffer.clone())
        .build()
        .unwrap();

    logger.info("started");

    // YYYY/MM/DD HH:MM:SS [core] started
    let line = buffer.lines().remove(0);
    let (stamp, rest) = line.split_at(19);
    assert_eq!(rest, " [core] started");
    let bytes = stamp.as_bytes();
    for (i, b) in bytes.iter().enumerate() {
        match i {
            4 | 7 => assert_eq!(*b, b'/', "{line}"),
            10 => assert_eq!(*b, b' ', "{line}"),
            13 | 16 => assert_eq!(*b, b':', "{line}"),
            _ => assert!(b.is_ascii_digit(), "{line}"),
        }
    }
}
