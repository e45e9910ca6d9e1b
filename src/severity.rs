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

//! Severity levels and the threshold comparison.

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// An ordered severity level.
///
/// Higher values are more verbose and less urgent:
///
/// ```text
/// None(0) < Fatal(1) < Error(2) < Info(3) < Debug(4)
/// ```
///
/// The same type serves as a message severity and as a logger threshold. As a threshold, a
/// message is emitted iff `severity <= threshold`. [`Severity::None`] is only meaningful as a
/// threshold ("emit nothing"); it is never emitted as a message severity.
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Severity {
    /// Emit nothing.
    None = 0,
    /// Events after which the process cannot continue.
    Fatal = 1,
    /// Errors the process may survive.
    Error = 2,
    /// Progress of tasks.
    #[default]
    Info = 3,
    /// Verbose diagnostics.
    Debug = 4,
}

impl Severity {
    /// All severities, from least to most verbose.
    pub const ALL: [Severity; 5] = [
        Severity::None,
        Severity::Fatal,
        Severity::Error,
        Severity::Info,
        Severity::Debug,
    ];

    /// Return the string representation of the `Severity`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::None => "NONE",
            Severity::Fatal => "FATAL",
            Severity::Error => "ERROR",
            Severity::Info => "INFO",
            Severity::Debug => "DEBUG",
        }
    }

    /// The numeric verbosity of this severity.
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Whether a message of this severity passes `threshold`.
    ///
    /// ```
    /// use tierlog::Severity;
    ///
    /// assert!(Severity::Error.passes(Severity::Info));
    /// assert!(Severity::Info.passes(Severity::Info));
    /// assert!(!Severity::Debug.passes(Severity::Info));
    /// assert!(!Severity::Fatal.passes(Severity::None));
    /// ```
    pub fn passes(self, threshold: Severity) -> bool {
        self != Severity::None && self <= threshold
    }
}

impl fmt::Debug for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Severity, Self::Err> {
        for (name, severity) in [
            ("none", Severity::None),
            ("off", Severity::None),
            ("fatal", Severity::Fatal),
            ("error", Severity::Error),
            ("info", Severity::Info),
            ("debug", Severity::Debug),
        ] {
            if s.eq_ignore_ascii_case(name) {
                return Ok(severity);
            }
        }

        Err(Error::invalid_argument(format!("malformed severity: {s:?}")))
    }
}

impl TryFrom<u8> for Severity {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Error> {
        Severity::ALL
            .get(usize::from(value))
            .copied()
            .ok_or_else(|| {
                Error::invalid_argument(format!("severity out of range: {value}"))
                    .with_context("max", Severity::Debug.as_u8())
            })
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> Self {
        severity.as_u8()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_ordering_matches_numeric_verbosity() {
        for pair in Severity::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert_eq!(pair[0].as_u8() + 1, pair[1].as_u8());
        }
    }

    #[test]
    fn test_passes_truth_table() {
        for severity in Severity::ALL {
            for threshold in Severity::ALL {
                let expected = severity.as_u8() != 0 && severity.as_u8() <= threshold.as_u8();
                assert_eq!(
                    severity.passes(threshold),
                    expected,
                    "{severity} against {threshold}"
                );
            }
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("DEBUG".parse::<Severity>().unwrap(), Severity::Debug);
        assert_eq!("Fatal".parse::<Severity>().unwrap(), Severity::Fatal);
        assert_eq!("off".parse::<Severity>().unwrap(), Severity::None);

        let err = "warn".parse::<Severity>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_try_from_u8() {
        assert_eq!(Severity::try_from(0).unwrap(), Severity::None);
        assert_eq!(Severity::try_from(4).unwrap(), Severity::Debug);
        assert_eq!(
            Severity::try_from(5).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
    }

    #[test]
    fn test_u8_conversions_agree() {
        for severity in Severity::ALL {
            let value = u8::from(severity);
            let back: Result<Severity, crate::Error> = value.try_into();
            assert_eq!(back.unwrap(), severity);
        }
        let err: crate::Error = Severity::try_from(u8::MAX).unwrap_err();
        assert!(err.to_string().contains("255"), "{err}");
    }

    #[test]
    fn test_display_pads() {
        assert_eq!(format!("{:>5}", Severity::Info), " INFO");
    }
}
