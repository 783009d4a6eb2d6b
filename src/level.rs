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

//! Severity levels.

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// The severity of a log message, and the threshold of a [`Logger`](crate::Logger).
///
/// Levels are totally ordered by declaration, from the most verbose to the most severe:
///
/// ```
/// use logroster::Level;
///
/// assert!(Level::Trace < Level::Debug);
/// assert!(Level::Debug < Level::Notice);
/// assert!(Level::Notice < Level::Warning);
/// assert!(Level::Warning < Level::Error);
/// assert!(Level::Error < Level::Critical);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum Level {
    /// Designates very low priority, often extremely verbose, information.
    Trace = 0,
    /// Designates debugging information.
    #[default]
    Debug = 1,
    /// Designates normal but significant conditions.
    Notice = 2,
    /// Designates hazardous situations.
    Warning = 3,
    /// Designates errors.
    Error = 4,
    /// Designates critical errors.
    Critical = 5,
}

impl Level {
    /// All levels in ascending severity.
    pub const ALL: [Level; 6] = [
        Level::Trace,
        Level::Debug,
        Level::Notice,
        Level::Warning,
        Level::Error,
        Level::Critical,
    ];

    /// Iterate over all levels in ascending severity.
    ///
    /// Each call returns a fresh iterator.
    pub fn iter() -> impl DoubleEndedIterator<Item = Level> + ExactSizeIterator + Clone {
        Level::ALL.into_iter()
    }

    /// Return the string representation of the `Level`.
    ///
    /// This returns the same string as the `fmt::Display` implementation.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Level::Trace => "trace",
            Level::Debug => "debug",
            Level::Notice => "notice",
            Level::Warning => "warning",
            Level::Error => "error",
            Level::Critical => "critical",
        }
    }

    pub(crate) const fn from_u8(v: u8) -> Level {
        match v {
            0 => Level::Trace,
            1 => Level::Debug,
            2 => Level::Notice,
            3 => Level::Warning,
            4 => Level::Error,
            _ => Level::Critical,
        }
    }
}

impl fmt::Debug for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> Result<Level, Self::Err> {
        for (name, level) in [
            ("trace", Level::Trace),
            ("debug", Level::Debug),
            ("notice", Level::Notice),
            ("warning", Level::Warning),
            ("warn", Level::Warning),
            ("error", Level::Error),
            ("critical", Level::Critical),
            ("crit", Level::Critical),
        ] {
            if s.trim().eq_ignore_ascii_case(name) {
                return Ok(level);
            }
        }

        Err(Error::new(format!("malformed level: {s:?}")))
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use super::*;

    #[test]
    fn test_order_follows_declaration() {
        for (i, a) in Level::iter().enumerate() {
            for (j, b) in Level::iter().enumerate() {
                assert_eq!(a.cmp(&b), i.cmp(&j), "{a} vs {b}");
                assert_eq!(a < b, i < j);
            }
        }
        assert_eq!(Level::Warning.cmp(&Level::Warning), Ordering::Equal);
    }

    #[test]
    fn test_iter_is_restartable() {
        let first: Vec<_> = Level::iter().collect();
        let second: Vec<_> = Level::iter().collect();
        assert_eq!(first, second);
        assert_eq!(first, Level::ALL);
        assert_eq!(Level::iter().len(), 6);
        assert!(first.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_u8_roundtrip_keeps_rank() {
        for level in Level::iter() {
            assert_eq!(Level::from_u8(level as u8), level);
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("warning".parse::<Level>().unwrap(), Level::Warning);
        assert_eq!("WARN".parse::<Level>().unwrap(), Level::Warning);
        assert_eq!(" Crit ".parse::<Level>().unwrap(), Level::Critical);
        assert_eq!("notice".parse::<Level>().unwrap(), Level::Notice);

        let err = "verbose".parse::<Level>().unwrap_err();
        assert_eq!(err.to_string(), r#"malformed level: "verbose""#);
    }

    #[test]
    fn test_display_pads() {
        assert_eq!(format!("{:>8}", Level::Error), "   error");
        assert_eq!(Level::default(), Level::Debug);
    }
}
