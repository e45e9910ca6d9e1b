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

//! Handlers for errors that happen while a line is emitted.
//!
//! Emission calls never return errors. Whatever goes wrong while formatting or writing a line is
//! handed to the logger's [`Trap`] instead.

use std::fmt;
use std::io;
use std::io::Write;

use crate::Error;

/// A handler for errors that cannot be returned to the caller.
pub trait Trap: fmt::Debug + Send + Sync + 'static {
    /// Handle an error raised while emitting or flushing.
    fn trap(&self, err: &Error);
}

impl<T: Trap> From<T> for Box<dyn Trap> {
    fn from(value: T) -> Self {
        Box::new(value)
    }
}

/// A trap that drops every error. This is the default of every logger.
#[derive(Debug, Default)]
#[non_exhaustive]
pub struct DiscardTrap {}

impl Trap for DiscardTrap {
    fn trap(&self, _: &Error) {}
}

/// A trap that sends errors to standard error if possible.
///
/// If standard error is not available, it does nothing.
#[derive(Debug, Default)]
#[non_exhaustive]
pub struct StderrTrap {}

impl Trap for StderrTrap {
    fn trap(&self, err: &Error) {
        let _ = writeln!(io::stderr(), "{err}");
    }
}
