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

use crate::Error;
use crate::LeveledLogger;
use crate::LoggerBuilder;
use crate::Severity;

/// Plain-data construction options for a [`LeveledLogger`].
///
/// With the `serde` feature enabled, this can be embedded in an application's own configuration
/// file. Missing fields take their [`Default`] values; severities are spelled in lower case.
///
/// ```toml
/// write_to_stdout = true
/// file_path = "/var/log/app/core.log"
/// component_tag = "core"
/// threshold = "debug"
/// ```
///
/// # Examples
///
/// ```
/// use tierlog::Config;
/// use tierlog::Severity;
///
/// let config = Config {
///     write_to_stdout: true,
///     component_tag: "core".to_string(),
///     threshold: Severity::Error,
///     ..Default::default()
/// };
/// let logger = config.build().unwrap();
/// logger.error("boom");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Config {
    /// Register the process' stdout.
    pub write_to_stdout: bool,
    /// Register a file opened in append mode. `None` or an empty path disables it.
    pub file_path: Option<PathBuf>,
    /// The label written into every line. Must not be empty.
    pub component_tag: String,
    /// The initial threshold.
    pub threshold: Severity,
    /// Render `file:line` of each call site.
    pub caller_location: bool,
    /// Render timestamps with microsecond precision.
    pub microseconds: bool,
    /// Render timestamps in UTC instead of the system time zone.
    pub utc: bool,
}

impl Config {
    /// Turn this configuration into a [`LoggerBuilder`], so that sinks or a trap can be added.
    pub fn builder(&self) -> LoggerBuilder {
        let mut builder = LoggerBuilder::new(self.component_tag.as_str())
            .threshold(self.threshold)
            .caller_location(self.caller_location)
            .microseconds(self.microseconds);
        if self.utc {
            builder = builder.utc();
        }
        if self.write_to_stdout {
            builder = builder.stdout();
        }
        if let Some(path) = &self.file_path {
            builder = builder.file(path);
        }
        builder
    }

    /// Build the [`LeveledLogger`] described by this configuration.
    ///
    /// # Errors
    ///
    /// See [`LoggerBuilder::build`].
    pub fn build(&self) -> Result<LeveledLogger, Error> {
        self.builder().build()
    }
}
