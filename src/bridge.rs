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

//! Bridge to the [`log`] crate facade.
//!
//! [`LeveledLogger`] implements [`log::Log`], so it can be installed as the facade's logger with
//! [`install`]. `log` levels map onto severities as follows:
//!
//! | `log`            | severity  |
//! |------------------|-----------|
//! | `Error`, `Warn`  | `Error`   |
//! | `Info`           | `Info`    |
//! | `Debug`, `Trace` | `Debug`   |
//!
//! The record's file and line become the caller location. There is no `log` counterpart of
//! [`Severity::Fatal`]; records never terminate the process.

use std::sync::Arc;

use crate::Error;
use crate::ErrorKind;
use crate::LeveledLogger;
use crate::Severity;
use crate::layout::Caller;

impl From<log::Level> for Severity {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error | log::Level::Warn => Severity::Error,
            log::Level::Info => Severity::Info,
            log::Level::Debug | log::Level::Trace => Severity::Debug,
        }
    }
}

impl From<Severity> for log::LevelFilter {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::None => log::LevelFilter::Off,
            Severity::Fatal | Severity::Error => log::LevelFilter::Error,
            Severity::Info => log::LevelFilter::Info,
            Severity::Debug => log::LevelFilter::Trace,
        }
    }
}

impl log::Log for LeveledLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        LeveledLogger::enabled(self, metadata.level().into())
    }

    fn log(&self, record: &log::Record) {
        let caller = record
            .file()
            .zip(record.line())
            .map(|(file, line)| Caller::new(file, line));
        self.emit(record.level().into(), caller, *record.args());
    }

    fn flush(&self) {
        if let Err(err) = LeveledLogger::flush(self) {
            self.trap(&err);
        }
    }
}

struct Shared(Arc<LeveledLogger>);

impl log::Log for Shared {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        log::Log::enabled(self.0.as_ref(), metadata)
    }

    fn log(&self, record: &log::Record) {
        log::Log::log(self.0.as_ref(), record)
    }

    fn flush(&self) {
        log::Log::flush(self.0.as_ref())
    }
}

/// Install `logger` as the [`log`] crate's global logger.
///
/// The facade's max level is set to `Trace`, so the logger's own threshold stays authoritative
/// and later [`LeveledLogger::set_threshold`] calls through the retained [`Arc`] take effect.
///
/// # Errors
///
/// Return an error if the `log` crate's global logger has already been set.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use tierlog::Severity;
///
/// let logger = Arc::new(tierlog::builder("core").stdout().build().unwrap());
/// tierlog::bridge::install(logger.clone()).unwrap();
///
/// log::info!("through the facade");
/// logger.set_threshold(Severity::Error);
/// log::info!("filtered");
/// ```
pub fn install(logger: Arc<LeveledLogger>) -> Result<(), Error> {
    log::set_boxed_logger(Box::new(Shared(logger))).map_err(|err| {
        Error::new(ErrorKind::Unexpected, "failed to set up log crate logger").with_source(err)
    })?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}

#[cfg(test)]
mod tests {
    use log::Log;

    use super::*;
    use crate::sink::Buffer;

    #[test]
    fn test_level_mapping() {
        assert_eq!(Severity::from(log::Level::Warn), Severity::Error);
        assert_eq!(Severity::from(log::Level::Trace), Severity::Debug);
        assert_eq!(log::LevelFilter::from(Severity::None), log::LevelFilter::Off);
        assert_eq!(log::LevelFilter::from(Severity::Info), log::LevelFilter::Info);
    }

    #[test]
    fn test_record_is_gated_and_located() {
        let buffer = Buffer::default();
        let logger = crate::builder("bridge")
            .threshold(Severity::Info)
            .caller_location(true)
            .sink(buffer.clone())
            .build()
            .unwrap();

        let metadata = log::Metadata::builder().level(log::Level::Debug).build();
        assert!(!Log::enabled(&logger, &metadata));
        Log::log(
            &logger,
            &log::Record::builder()
                .level(log::Level::Debug)
                .args(format_args!("hidden {}", 1))
                .build(),
        );

        Log::log(
            &logger,
            &log::Record::builder()
                .level(log::Level::Warn)
                .file(Some("src/net/peer.rs"))
                .line(Some(88))
                .args(format_args!("peer {} stalled", 3))
                .build(),
        );

        let lines = buffer.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("[bridge/peer.rs:88] peer 3 stalled"), "{}", lines[0]);
    }
}
