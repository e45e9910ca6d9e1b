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
use std::io::Write;
use std::sync::Mutex;
use std::sync::MutexGuard;

use crate::Error;
use crate::sink::Sink;

/// A sink over any [`Write`] implementation, such as a socket or an in-memory cursor.
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
///
/// use tierlog::sink::Writer;
///
/// let sink = Writer::new(Cursor::new(Vec::<u8>::new()));
/// let cursor = sink.into_inner();
/// assert!(cursor.get_ref().is_empty());
/// ```
pub struct Writer<W> {
    inner: Mutex<W>,
}

impl<W: Write + Send + 'static> Writer<W> {
    /// Wrap `inner`.
    pub fn new(inner: W) -> Self {
        Self {
            inner: Mutex::new(inner),
        }
    }

    /// Unwrap the underlying writer.
    pub fn into_inner(self) -> W {
        self.inner.into_inner().unwrap_or_else(|e| e.into_inner())
    }

    fn inner(&self) -> MutexGuard<'_, W> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl<W> fmt::Debug for Writer<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Writer")
            .field("inner", &std::any::type_name::<W>())
            .finish()
    }
}

impl<W: Write + Send + 'static> Sink for Writer<W> {
    fn write_line(&self, line: &[u8]) -> Result<(), Error> {
        self.inner().write_all(line).map_err(Error::from_io_error)
    }

    fn flush(&self) -> Result<(), Error> {
        self.inner().flush().map_err(Error::from_io_error)
    }
}
