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

use std::path::PathBuf;
use std::sync::Arc;

use jiff::tz::TimeZone;

use crate::Error;
use crate::LeveledLogger;
use crate::Severity;
use crate::layout::LineLayout;
use crate::sink;
use crate::sink::Destination;
use crate::sink::Sink;
use crate::trap::DiscardTrap;
use crate::trap::Trap;

/// Create a new [`LoggerBuilder`] for a logger tagged with `component_tag`.
///
/// Sinks are registered in the order the builder methods are called:
///
/// ```
/// use tierlog::Severity;
///
/// let dir = tempfile::tempdir().unwrap();
/// let logger = tierlog::builder("core")
///     .threshold(Severity::Debug)
///     .stdout()
///     .file(dir.path().join("core.log"))
///     .caller_location(true)
///     .build()
///     .unwrap();
///
/// logger.debug("written to stdout, then to core.log");
/// ```
pub fn builder(component_tag: impl Into<String>) -> LoggerBuilder {
    LoggerBuilder::new(component_tag)
}

#[derive(Debug)]
enum PendingSink {
    Stdout,
    Stderr,
    File(PathBuf),
    Ready(Box<dyn Sink>),
}

/// A builder for configuring a [`LeveledLogger`]. See also [`builder`].
///
/// Nothing is opened until [`LoggerBuilder::build`]. Defaults: threshold [`Severity::Info`], no
/// sinks, second-precision local timestamps, no caller location, and a [`DiscardTrap`].
#[must_use = "call `build` to construct the logger"]
#[derive(Debug)]
pub struct LoggerBuilder {
    component_tag: String,
    threshold: Severity,
    sinks: Vec<PendingSink>,
    layout: LineLayout,
    trap: Box<dyn Trap>,
}

impl LoggerBuilder {
    /// Create a new builder for a logger tagged with `component_tag`.
    pub fn new(component_tag: impl Into<String>) -> Self {
        Self {
            component_tag: component_tag.into(),
            threshold: Severity::default(),
            sinks: vec![],
            layout: LineLayout::default(),
            trap: Box::new(DiscardTrap::default()),
        }
    }

    /// Set the initial threshold.
    pub fn threshold(mut self, threshold: Severity) -> Self {
        self.threshold = threshold;
        self
    }

    /// Register the process' stdout.
    pub fn stdout(mut self) -> Self {
        self.sinks.push(PendingSink::Stdout);
        self
    }

    /// Register the process' stderr.
    pub fn stderr(mut self) -> Self {
        self.sinks.push(PendingSink::Stderr);
        self
    }

    /// Register a file opened in append mode at `path`.
    ///
    /// An empty path registers nothing.
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if !path.as_os_str().is_empty() {
            self.sinks.push(PendingSink::File(path));
        }
        self
    }

    /// Register an already constructed sink.
    pub fn sink(mut self, sink: impl Into<Box<dyn Sink>>) -> Self {
        self.sinks.push(PendingSink::Ready(sink.into()));
        self
    }

    /// Render `file:line` of each call site after the component tag.
    pub fn caller_location(mut self, enabled: bool) -> Self {
        self.layout = self.layout.caller_location(enabled);
        self
    }

    /// Render timestamps with microsecond precision.
    pub fn microseconds(mut self, enabled: bool) -> Self {
        self.layout = self.layout.microseconds(enabled);
        self
    }

    /// Render timestamps in `tz` instead of the system time zone.
    pub fn timezone(mut self, tz: TimeZone) -> Self {
        self.layout = self.layout.timezone(tz);
        self
    }

    /// Render timestamps in UTC.
    pub fn utc(self) -> Self {
        self.timezone(TimeZone::UTC)
    }

    /// Set the trap for errors raised while emitting.
    ///
    /// Default to [`DiscardTrap`].
    pub fn trap(mut self, trap: impl Into<Box<dyn Trap>>) -> Self {
        self.trap = trap.into();
        self
    }

    /// Build the [`LeveledLogger`].
    ///
    /// # Errors
    ///
    /// Return an error if either:
    ///
    /// * The component tag is empty.
    /// * A registered file cannot be opened. Files opened before the failing one are closed again.
    pub fn build(self) -> Result<LeveledLogger, Error> {
        let LoggerBuilder {
            component_tag,
            threshold,
            sinks,
            layout,
            trap,
        } = self;

        if component_tag.is_empty() {
            return Err(Error::invalid_argument("component tag must not be empty"));
        }

        let mut destination = Destination::new();
        for pending in sinks {
            match pending {
                PendingSink::Stdout => destination.push(sink::Stdout::default()),
                PendingSink::Stderr => destination.push(sink::Stderr::default()),
                PendingSink::File(path) => destination.push(sink::File::open(path)?),
                PendingSink::Ready(sink) => destination.push(sink),
            }
        }

        Ok(LeveledLogger::from_parts(
            Arc::from(component_tag),
            threshold,
            destination,
            layout,
            trap,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use crate::sink::Buffer;

    #[test]
    fn test_empty_tag_is_rejected() {
        let err = builder("").stdout().build().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_empty_file_path_registers_nothing() {
        let buffer = Buffer::default();
        let logger = builder("core")
            .file("")
            .sink(buffer.clone())
            .build()
            .unwrap();
        let previous = logger.set_destination(Destination::new());
        assert_eq!(previous.len(), 1);
    }

    #[test]
    fn test_failed_file_fails_build() {
        let dir = tempfile::tempdir().unwrap();
        let ok = dir.path().join("ok.log");
        let bad = dir.path().join("missing").join("bad.log");

        let err = builder("core")
            .stdout()
            .file(&ok)
            .file(&bad)
            .build()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
        // files opened before the failure are still created, but nothing is written to them
        assert_eq!(std::fs::read_to_string(&ok).unwrap(), "");
    }

    #[test]
    fn test_console_sinks_register_in_order() {
        let logger = builder("core").stderr().build().unwrap();
        logger.debug("not shown");
        logger.error("to stderr");
        let previous = logger.set_destination(Destination::new());
        assert_eq!(previous.len(), 1);

        let logger = builder("core").stdout().stderr().build().unwrap();
        assert_eq!(logger.set_destination(Destination::new()).len(), 2);
    }

    #[test]
    fn test_stderr_and_testing_sinks_accept_lines() {
        let destination = Destination::new()
            .sink(crate::sink::Stderr::default())
            .sink(crate::sink::Testing::default());
        destination.write_line(b"captured by the test harness\n").unwrap();
        destination.flush().unwrap();
    }
}
