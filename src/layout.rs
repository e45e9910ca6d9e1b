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

//! The line format shared by every sink of a logger.

use std::fmt;
use std::fmt::Write;
use std::panic::Location;
use std::path::Path;

use jiff::Zoned;
use jiff::tz::TimeZone;

use crate::Error;

const DATE_TIME: &str = "%Y/%m/%d %H:%M:%S";
const DATE_TIME_MICROS: &str = "%Y/%m/%d %H:%M:%S.%6f";

/// The source location of a log call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller<'a> {
    file: &'a str,
    line: u32,
}

impl<'a> Caller<'a> {
    /// Create a caller from a source file path and line.
    pub fn new(file: &'a str, line: u32) -> Self {
        Self { file, line }
    }

    /// The source file path as recorded by the compiler.
    pub fn file(&self) -> &'a str {
        self.file
    }

    /// The line of the log call.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// The last component of [`Caller::file`].
    pub fn filename(&self) -> &'a str {
        Path::new(self.file)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(self.file)
    }
}

impl<'a> From<&'a Location<'a>> for Caller<'a> {
    fn from(location: &'a Location<'a>) -> Self {
        Caller::new(location.file(), location.line())
    }
}

/// A layout that formats one log line.
///
/// Output format:
///
/// ```text
/// 2024/08/11 22:44:57 [core] started
/// 2024/08/11 22:44:57.172105 [core] started
/// 2024/08/11 22:44:57 [core/main.rs:42] started
/// ```
///
/// The timestamp is rendered in the system time zone unless [`LineLayout::timezone`] is set. The
/// caller location is only rendered when [`LineLayout::caller_location`] is enabled.
#[derive(Debug, Clone, Default)]
pub struct LineLayout {
    caller_location: bool,
    microseconds: bool,
    tz: Option<TimeZone>,
}

impl LineLayout {
    /// Render `file:line` of the call site after the component tag.
    pub fn caller_location(mut self, enabled: bool) -> Self {
        self.caller_location = enabled;
        self
    }

    /// Render the timestamp with microsecond precision.
    pub fn microseconds(mut self, enabled: bool) -> Self {
        self.microseconds = enabled;
        self
    }

    /// Render timestamps in `tz` instead of the system time zone.
    pub fn timezone(mut self, tz: TimeZone) -> Self {
        self.tz = Some(tz);
        self
    }

    /// Format a line stamped with the current time.
    ///
    /// # Errors
    ///
    /// Return an error if the message's `Display` implementation fails.
    pub fn format(
        &self,
        tag: &str,
        caller: Option<Caller<'_>>,
        message: fmt::Arguments<'_>,
    ) -> Result<Vec<u8>, Error> {
        let now = match self.tz.clone() {
            Some(tz) => Zoned::now().with_time_zone(tz),
            None => Zoned::now(),
        };
        self.format_at(&now, tag, caller, message)
    }

    /// Format a line stamped with `time`.
    ///
    /// The result always ends with exactly one `\n`: a message that already ends with a line break
    /// does not get another one.
    ///
    /// # Errors
    ///
    /// Return an error if the message's `Display` implementation fails.
    pub fn format_at(
        &self,
        time: &Zoned,
        tag: &str,
        caller: Option<Caller<'_>>,
        message: fmt::Arguments<'_>,
    ) -> Result<Vec<u8>, Error> {
        let mut text = String::new();

        let pattern = if self.microseconds {
            DATE_TIME_MICROS
        } else {
            DATE_TIME
        };
        write!(&mut text, "{}", time.strftime(pattern)).map_err(Error::from_fmt_error)?;

        let prefix = match caller.filter(|_| self.caller_location) {
            Some(caller) => write!(
                &mut text,
                " [{tag}/{file}:{line}] ",
                file = caller.filename(),
                line = caller.line(),
            ),
            None => write!(&mut text, " [{tag}] "),
        };
        prefix.map_err(Error::from_fmt_error)?;

        text.write_fmt(message).map_err(Error::from_fmt_error)?;
        if !text.ends_with('\n') {
            text.push('\n');
        }

        Ok(text.into_bytes())
    }
}
