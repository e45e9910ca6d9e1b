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

//! Printf-style emission macros.
//!
//! Each macro takes a logger (anything that derefs to a [`LeveledLogger`](crate::LeveledLogger))
//! followed by [`format_args!`] arguments. The threshold is checked first, so arguments of a
//! filtered message are never evaluated for formatting.

/// Write a formatted message at [`Severity::Fatal`](crate::Severity::Fatal), then exit the process
/// with status 1.
///
/// ```no_run
/// let logger = tierlog::builder("core").stdout().build().unwrap();
/// let path = "/etc/core.toml";
/// tierlog::fatal!(logger, "cannot read {path}");
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::LeveledLogger::fatal_fmt(&$logger, ::std::format_args!($($arg)+))
    };
}

/// Write a formatted message at [`Severity::Error`](crate::Severity::Error).
///
/// ```
/// let logger = tierlog::builder("core").stdout().build().unwrap();
/// tierlog::error!(logger, "request {} failed: {}", 7, "timeout");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {{
        let logger: &$crate::LeveledLogger = &$logger;
        if logger.enabled($crate::Severity::Error) {
            logger.error_fmt(::std::format_args!($($arg)+));
        }
    }};
}

/// Write a formatted message at [`Severity::Info`](crate::Severity::Info).
///
/// ```
/// let logger = tierlog::builder("core").stdout().build().unwrap();
/// tierlog::info!(logger, "listening on {}", "127.0.0.1:8080");
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {{
        let logger: &$crate::LeveledLogger = &$logger;
        if logger.enabled($crate::Severity::Info) {
            logger.info_fmt(::std::format_args!($($arg)+));
        }
    }};
}

/// Write a formatted message at [`Severity::Debug`](crate::Severity::Debug).
///
/// ```
/// let logger = tierlog::builder("core").stdout().build().unwrap();
/// let peers = vec!["a", "b"];
/// tierlog::debug!(logger, "peers: {peers:?}");
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {{
        let logger: &$crate::LeveledLogger = &$logger;
        if logger.enabled($crate::Severity::Debug) {
            logger.debug_fmt(::std::format_args!($($arg)+));
        }
    }};
}
