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

//! Destinations that receive formatted log lines.

use std::fmt;

use crate::Error;

mod file;
mod stdio;
mod testing;
mod writer;

pub use self::file::File;
pub use self::stdio::Stderr;
pub use self::stdio::Stdout;
pub use self::testing::Buffer;
pub use self::testing::Testing;
pub use self::writer::Writer;

/// A sink that receives complete, newline-terminated log lines.
pub trait Sink: fmt::Debug + Send + Sync + 'static {
    /// Write one formatted line, including its trailing line break.
    fn write_line(&self, line: &[u8]) -> Result<(), Error>;

    /// Flush any buffered lines.
    ///
    /// Default to a no-op.
    fn flush(&self) -> Result<(), Error> {
        Ok(())
    }
}

impl<T: Sink> From<T> for Box<dyn Sink> {
    fn from(value: T) -> Self {
        Box::new(value)
    }
}

/// An ordered set of sinks that all receive the same lines.
///
/// Writes go to every sink in registration order. A failing sink does not stop the remaining
/// sinks from being written; all failures are collected into one [`Error`].
///
/// An empty destination is valid and silently discards everything.
///
/// # Examples
///
/// ```
/// use tierlog::sink::Buffer;
/// use tierlog::sink::Destination;
/// use tierlog::sink::Stdout;
///
/// let buffer = Buffer::default();
/// let destination = Destination::new()
///     .sink(Stdout::default())
///     .sink(buffer.clone());
/// assert_eq!(destination.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct Destination {
    sinks: Vec<Box<dyn Sink>>,
}

impl Destination {
    /// Create an empty destination.
    pub fn new() -> Self {
        Self { sinks: vec![] }
    }

    /// Register a sink after the existing ones.
    pub fn sink(mut self, sink: impl Into<Box<dyn Sink>>) -> Self {
        self.push(sink);
        self
    }

    /// Register a sink after the existing ones.
    pub fn push(&mut self, sink: impl Into<Box<dyn Sink>>) {
        self.sinks.push(sink.into());
    }

    /// The number of registered sinks.
    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    /// Whether no sink is registered.
    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    /// Write `line` to every sink.
    ///
    /// # Errors
    ///
    /// Return an error carrying one source per failing sink, after all sinks have been tried.
    pub fn write_line(&self, line: &[u8]) -> Result<(), Error> {
        self.each(|sink| sink.write_line(line), "failed to write log line")
    }

    /// Flush every sink.
    ///
    /// # Errors
    ///
    /// Return an error carrying one source per failing sink, after all sinks have been tried.
    pub fn flush(&self) -> Result<(), Error> {
        self.each(|sink| sink.flush(), "failed to flush sinks")
    }

    fn each<F>(&self, mut f: F, message: &'static str) -> Result<(), Error>
    where
        F: FnMut(&dyn Sink) -> Result<(), Error>,
    {
        let mut failed: Option<Error> = None;
        for (i, sink) in self.sinks.iter().enumerate() {
            if let Err(err) = f(sink.as_ref()) {
                let agg = failed
                    .take()
                    .unwrap_or_else(|| Error::new(err.kind(), message));
                failed = Some(agg.with_context("sink", i).with_source(err));
            }
        }

        match failed {
            None => Ok(()),
            Some(err) => Err(err),
        }
    }
}

impl FromIterator<Box<dyn Sink>> for Destination {
    fn from_iter<T: IntoIterator<Item = Box<dyn Sink>>>(iter: T) -> Self {
        Self {
            sinks: iter.into_iter().collect(),
        }
    }
}

impl<T: Sink> From<T> for Destination {
    fn from(sink: T) -> Self {
        Destination::new().sink(sink)
    }
}

/// A sink that always fails, for exercising partial fan-out failures.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct Broken;

#[cfg(test)]
impl Sink for Broken {
    fn write_line(&self, _: &[u8]) -> Result<(), Error> {
        Err(Error::from_io_error(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "sink is broken",
        )))
    }

    fn flush(&self) -> Result<(), Error> {
        Err(Error::new(crate::ErrorKind::Io, "cannot flush a broken sink"))
    }
}
