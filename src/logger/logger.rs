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

use std::fmt;
use std::panic::Location;
use std::path::Path;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::RwLock;
use std::sync::atomic::AtomicU8;
use std::sync::atomic::Ordering;

use crate::Error;
use crate::Severity;
use crate::layout::Caller;
use crate::layout::LineLayout;
use crate::logger::builder;
use crate::sink::Destination;
use crate::trap::Trap;

/// A logger that gates messages by severity and writes them to every sink of its destination.
///
/// Each accepted message becomes one line:
///
/// ```text
/// 2024/08/11 22:44:57 [core] started
/// ```
///
/// Every severity has three emission styles: `info(msg)` takes any `Display`, `info_fmt` takes
/// [`format_args!`] (see also the [`info!`](crate::info) macro), and `info_ln` joins its parts with
/// spaces. A message more verbose than the threshold is dropped before anything is formatted.
///
/// The threshold, component tag and destination can be changed through `&self`, so a logger can
/// be shared behind an [`Arc`]. Lines are written to the sinks under one lock, so concurrent
/// callers never interleave partial lines and all sinks observe the same order.
///
/// The timestamp is taken before that lock is acquired, so under contention a line can carry a
/// slightly earlier time than the line written just before it.
///
/// # Examples
///
/// ```
/// use tierlog::LeveledLogger;
/// use tierlog::Severity;
///
/// let logger = LeveledLogger::new(true, "", "core", Severity::Info).unwrap();
/// logger.info("started");
/// logger.debug("not printed");
/// ```
#[derive(Debug)]
pub struct LeveledLogger {
    threshold: AtomicU8,
    tag: RwLock<Arc<str>>,
    destination: Mutex<Destination>,
    layout: LineLayout,
    trap: Box<dyn Trap>,
}

impl LeveledLogger {
    /// Create a logger writing to stdout and/or an append-mode file.
    ///
    /// The stdout sink, if enabled, is registered before the file sink. An empty `file_path`
    /// disables the file sink. Without any sink, the logger silently discards every line.
    ///
    /// # Errors
    ///
    /// Return an [`ErrorKind::Io`](crate::ErrorKind::Io) error if the file cannot be opened, and
    /// an [`ErrorKind::InvalidArgument`](crate::ErrorKind::InvalidArgument) error if
    /// `component_tag` is empty.
    pub fn new(
        write_to_stdout: bool,
        file_path: impl AsRef<Path>,
        component_tag: impl Into<String>,
        threshold: Severity,
    ) -> Result<LeveledLogger, Error> {
        let mut builder = builder(component_tag).threshold(threshold);
        if write_to_stdout {
            builder = builder.stdout();
        }
        builder.file(file_path.as_ref()).build()
    }

    pub(super) fn from_parts(
        tag: Arc<str>,
        threshold: Severity,
        destination: Destination,
        layout: LineLayout,
        trap: Box<dyn Trap>,
    ) -> Self {
        debug_assert!(!tag.is_empty(), "component tag must be validated by the builder");

        Self {
            threshold: AtomicU8::new(threshold.as_u8()),
            tag: RwLock::new(tag),
            destination: Mutex::new(destination),
            layout,
            trap,
        }
    }

    /// The current threshold.
    pub fn threshold(&self) -> Severity {
        Severity::try_from(self.threshold.load(Ordering::Relaxed)).unwrap_or(Severity::None)
    }

    /// Replace the threshold for all subsequent emissions.
    pub fn set_threshold(&self, threshold: Severity) {
        self.threshold.store(threshold.as_u8(), Ordering::Relaxed);
    }

    /// Whether a message of `severity` would be written.
    ///
    /// Always `false` for [`Severity::None`].
    pub fn enabled(&self, severity: Severity) -> bool {
        severity.passes(self.threshold())
    }

    /// The current component tag.
    pub fn component_tag(&self) -> Arc<str> {
        self.tag.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Replace the component tag used in all subsequent lines.
    ///
    /// # Errors
    ///
    /// Return an [`ErrorKind::InvalidArgument`](crate::ErrorKind::InvalidArgument) error if
    /// `tag` is empty. The previous tag stays in effect.
    pub fn set_component_tag(&self, tag: impl Into<String>) -> Result<(), Error> {
        let tag = tag.into();
        if tag.is_empty() {
            return Err(Error::invalid_argument("component tag must not be empty"));
        }

        *self.tag.write().unwrap_or_else(|e| e.into_inner()) = Arc::from(tag);
        Ok(())
    }

    /// Swap the destination used for all subsequent lines and return the previous one.
    ///
    /// Dropping the returned destination closes any file it owns.
    pub fn set_destination(&self, destination: impl Into<Destination>) -> Destination {
        std::mem::replace(&mut *self.destination(), destination.into())
    }

    /// Flush every sink.
    ///
    /// # Errors
    ///
    /// Return an error carrying one source per sink that failed to flush.
    pub fn flush(&self) -> Result<(), Error> {
        self.destination().flush()
    }

    /// Write `message` at `severity` if it passes the threshold.
    ///
    /// This is what every emission method funnels into; it is public for adapters that carry
    /// their own caller location, such as the `log` crate bridge.
    pub fn emit(
        &self,
        severity: Severity,
        caller: Option<Caller<'_>>,
        message: fmt::Arguments<'_>,
    ) {
        if !self.enabled(severity) {
            return;
        }

        let tag = self.component_tag();
        let line = match self.layout.format(&tag, caller, message) {
            Ok(line) => line,
            Err(err) => {
                self.trap.trap(&err);
                return;
            }
        };

        let written = self.destination().write_line(&line);
        if let Err(err) = written {
            self.trap.trap(&err);
        }
    }

    #[cfg(feature = "bridge-log")]
    pub(crate) fn trap(&self, err: &Error) {
        self.trap.trap(err);
    }

    fn destination(&self) -> MutexGuard<'_, Destination> {
        self.destination.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn exit(&self) -> ! {
        let flushed = self.destination().flush();
        if let Err(err) = flushed {
            self.trap.trap(&err);
        }
        std::process::exit(1)
    }
}

impl LeveledLogger {
    /// Write `message` at [`Severity::Fatal`], then exit the process with status 1.
    ///
    /// The process exits even if the message was filtered out or the write failed.
    #[track_caller]
    pub fn fatal(&self, message: impl fmt::Display) -> ! {
        let caller = Location::caller();
        self.emit(Severity::Fatal, Some(caller.into()), format_args!("{message}"));
        self.exit()
    }

    /// Write formatted arguments at [`Severity::Fatal`], then exit the process with status 1.
    #[track_caller]
    pub fn fatal_fmt(&self, args: fmt::Arguments<'_>) -> ! {
        let caller = Location::caller();
        self.emit(Severity::Fatal, Some(caller.into()), args);
        self.exit()
    }

    /// Write space-joined `parts` at [`Severity::Fatal`], then exit the process with status 1.
    #[track_caller]
    pub fn fatal_ln(&self, parts: &[&dyn fmt::Display]) -> ! {
        let caller = Location::caller();
        self.emit(Severity::Fatal, Some(caller.into()), format_args!("{}", Joined(parts)));
        self.exit()
    }
}

impl LeveledLogger {
    /// Write `message` at [`Severity::Error`].
    #[track_caller]
    pub fn error(&self, message: impl fmt::Display) {
        let caller = Location::caller();
        self.emit(Severity::Error, Some(caller.into()), format_args!("{message}"));
    }

    /// Write formatted arguments at [`Severity::Error`].
    #[track_caller]
    pub fn error_fmt(&self, args: fmt::Arguments<'_>) {
        let caller = Location::caller();
        self.emit(Severity::Error, Some(caller.into()), args);
    }

    /// Write space-joined `parts` at [`Severity::Error`].
    #[track_caller]
    pub fn error_ln(&self, parts: &[&dyn fmt::Display]) {
        let caller = Location::caller();
        self.emit(Severity::Error, Some(caller.into()), format_args!("{}", Joined(parts)));
    }
}

impl LeveledLogger {
    /// Write `message` at [`Severity::Info`].
    #[track_caller]
    pub fn info(&self, message: impl fmt::Display) {
        let caller = Location::caller();
        self.emit(Severity::Info, Some(caller.into()), format_args!("{message}"));
    }

    /// Write formatted arguments at [`Severity::Info`].
    #[track_caller]
    pub fn info_fmt(&self, args: fmt::Arguments<'_>) {
        let caller = Location::caller();
        self.emit(Severity::Info, Some(caller.into()), args);
    }

    /// Write space-joined `parts` at [`Severity::Info`].
    #[track_caller]
    pub fn info_ln(&self, parts: &[&dyn fmt::Display]) {
        let caller = Location::caller();
        self.emit(Severity::Info, Some(caller.into()), format_args!("{}", Joined(parts)));
    }
}

impl LeveledLogger {
    /// Write `message` at [`Severity::Debug`].
    #[track_caller]
    pub fn debug(&self, message: impl fmt::Display) {
        let caller = Location::caller();
        self.emit(Severity::Debug, Some(caller.into()), format_args!("{message}"));
    }

    /// Write formatted arguments at [`Severity::Debug`].
    #[track_caller]
    pub fn debug_fmt(&self, args: fmt::Arguments<'_>) {
        let caller = Location::caller();
        self.emit(Severity::Debug, Some(caller.into()), args);
    }

    /// Write space-joined `parts` at [`Severity::Debug`].
    #[track_caller]
    pub fn debug_ln(&self, parts: &[&dyn fmt::Display]) {
        let caller = Location::caller();
        self.emit(Severity::Debug, Some(caller.into()), format_args!("{}", Joined(parts)));
    }
}

struct Joined<'a>(&'a [&'a dyn fmt::Display]);

impl fmt::Display for Joined<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{part}")?;
        }
        Ok(())
    }
}
