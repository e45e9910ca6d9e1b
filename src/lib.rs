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

//! Tierlog is a small leveled logger: it gates messages by severity and writes each accepted
//! message as one timestamped, component-tagged line to every configured sink.
//!
//! # Overview
//!
//! A [`LeveledLogger`] owns a threshold, a component tag and a [`Destination`](sink::Destination)
//! of sinks (stdout, an append-mode file, or any [`Sink`]). Severities are ordered
//! `None < Fatal < Error < Info < Debug`; a message is written iff its severity is at most the
//! threshold. Loggers are plain values: create one per subsystem and pass it around, there is no
//! global instance.
//!
//! ```text
//! 2024/08/11 22:44:57 [core] started
//! ```
//!
//! # Examples
//!
//! Log to stdout:
//!
//! ```
//! use tierlog::LeveledLogger;
//! use tierlog::Severity;
//!
//! let logger = LeveledLogger::new(true, "", "core", Severity::Info).unwrap();
//! logger.info("started");
//! tierlog::info!(logger, "listening on {}", 8080);
//! logger.debug("not printed");
//! ```
//!
//! Log to stdout and a file, with call sites:
//!
//! ```
//! use tierlog::Severity;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let logger = tierlog::builder("store")
//!     .threshold(Severity::Debug)
//!     .stdout()
//!     .file(dir.path().join("store.log"))
//!     .caller_location(true)
//!     .microseconds(true)
//!     .build()
//!     .unwrap();
//!
//! logger.debug_ln(&[&"compacted", &3, &"segments"]);
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod layout;
pub mod sink;
pub mod trap;

#[cfg(feature = "bridge-log")]
pub mod bridge;

mod config;
mod error;
mod logger;
mod macros;
mod severity;

pub use self::config::Config;
pub use self::error::Error;
pub use self::error::ErrorKind;
pub use self::logger::LeveledLogger;
pub use self::logger::LoggerBuilder;
pub use self::logger::builder;
pub use self::severity::Severity;
pub use self::sink::Sink;
pub use self::trap::Trap;
