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

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;

use crate::Error;
use crate::sink::Sink;

/// A sink that writes log lines that can be captured by a test harness (like `cargo test`),
/// and thus the outputs are suppressed unless `--nocapture` or `--show-output` is specified.
///
/// # Examples
///
/// ```
/// let logger = tierlog::builder("test")
///     .sink(tierlog::sink::Testing::default())
///     .build()
///     .unwrap();
/// logger.info("visible with --nocapture");
/// ```
#[derive(Debug, Default)]
#[non_exhaustive]
pub struct Testing {}

impl Sink for Testing {
    fn write_line(&self, line: &[u8]) -> Result<(), Error> {
        eprint!("{}", String::from_utf8_lossy(line));
        Ok(())
    }
}

/// A sink that keeps every line in memory.
///
/// Clones share the same buffer, so a clone can be handed to a logger while the original is kept
/// for inspection.
///
/// # Examples
///
/// ```
/// use tierlog::Severity;
/// use tierlog::sink::Buffer;
///
/// let buffer = Buffer::default();
/// let logger = tierlog::builder("core")
///     .threshold(Severity::Info)
///     .sink(buffer.clone())
///     .build()
///     .unwrap();
///
/// logger.info("started");
/// logger.debug("detail");
///
/// let lines = buffer.lines();
/// assert_eq!(lines.len(), 1);
/// assert!(lines[0].ends_with("[core] started"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Buffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl Buffer {
    /// Everything written so far.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes()).into_owned()
    }

    /// Every line written so far, without line breaks.
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }

    /// Discard everything written so far.
    pub fn clear(&self) {
        self.bytes().clear();
    }

    fn bytes(&self) -> MutexGuard<'_, Vec<u8>> {
        self.bytes.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Sink for Buffer {
    fn write_line(&self, line: &[u8]) -> Result<(), Error> {
        self.bytes().extend_from_slice(line);
        Ok(())
    }
}
