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

use std::fmt::Write;

use colored::Color;
use colored::ColoredString;
use colored::Colorize;
use jiff::Timestamp;
use jiff::tz::TimeZone;

use crate::Error;
use crate::Layout;
use crate::Level;
use crate::record::Record;

/// A layout that formats log record as optionally colored, timestamped text.
///
/// Output format:
///
/// ```text
/// 2024-08-11T22:44:57.172105+08:00 CRITICAL net: main.rs:51 Hello critical!
/// 2024-08-11T22:44:57.172219+08:00  WARNING net: main.rs:52 Hello warning!
/// 2024-08-11T22:44:57.172276+08:00   NOTICE net: main.rs:53 Hello notice!
/// 2024-08-11T22:44:57.172329+08:00    DEBUG net: main.rs:54 Hello debug!
/// ```
///
/// By default, log levels are colored. Call [`no_color`](TextLayout::no_color) to disable
/// coloring.
///
/// You can customize the timezone of the timestamp with [`timezone`](TextLayout::timezone).
/// Otherwise, the system timezone is used.
///
/// # Examples
///
/// ```
/// use logroster::layout::TextLayout;
///
/// let layout = TextLayout::default();
/// ```
#[derive(Debug, Clone)]
pub struct TextLayout {
    colors: LevelColor,
    no_color: bool,
    timezone: TimeZone,
    timestamp_format: Option<fn(Timestamp, &TimeZone) -> String>,
}

impl Default for TextLayout {
    fn default() -> Self {
        Self {
            colors: LevelColor::default(),
            no_color: false,
            timezone: TimeZone::system(),
            timestamp_format: None,
        }
    }
}

impl TextLayout {
    /// Customize the color of a log level.
    ///
    /// No effect if `no_color` is set.
    pub fn level_color(mut self, level: Level, color: Color) -> Self {
        self.colors.0[level as usize] = color;
        self
    }

    /// Disable colored output.
    pub fn no_color(mut self) -> Self {
        self.no_color = true;
        self
    }

    /// Set the timezone for timestamps.
    ///
    /// Defaults to the system timezone if not set.
    ///
    /// # Examples
    ///
    /// ```
    /// use jiff::tz::TimeZone;
    /// use logroster::layout::TextLayout;
    ///
    /// let layout = TextLayout::default().timezone(TimeZone::UTC);
    /// ```
    pub fn timezone(mut self, tz: TimeZone) -> Self {
        self.timezone = tz;
        self
    }

    /// Set a user-defined timestamp format function.
    ///
    /// Default to formatting the timestamp with offset as ISO 8601, at microsecond precision.
    pub fn timestamp_format(mut self, format: fn(Timestamp, &TimeZone) -> String) -> Self {
        self.timestamp_format = Some(format);
        self
    }

    fn format_record_level(&self, level: Level) -> ColoredString {
        let padded = format!("{:>8}", level.as_str().to_ascii_uppercase());
        if self.no_color {
            ColoredString::from(padded)
        } else {
            padded.as_str().color(self.colors.0[level as usize])
        }
    }
}

fn default_timestamp_format(ts: Timestamp, tz: &TimeZone) -> String {
    let offset = tz.to_offset(ts);
    format!("{:.6}", ts.display_with_offset(offset))
}

impl Layout for TextLayout {
    fn format(&self, record: &Record) -> Result<Vec<u8>, Error> {
        let ts = Timestamp::try_from(record.time())
            .map_err(|err| Error::new("record time out of range").with_source(err))?;
        let mut text = match self.timestamp_format {
            Some(format) => format(ts, &self.timezone),
            None => default_timestamp_format(ts, &self.timezone),
        };

        let level = self.format_record_level(record.level());
        let label = record.label();
        let file = record.filename();
        let line = record.line().unwrap_or_default();
        let message = record.message();
        write!(&mut text, " {level} {label}: {file}:{line} {message}")
            .map_err(Error::from_fmt_error)?;

        Ok(text.into_bytes())
    }
}

/// Colors for different log levels, indexed by level rank.
#[derive(Debug, Clone)]
struct LevelColor([Color; 6]);

impl Default for LevelColor {
    fn default() -> Self {
        Self([
            Color::Magenta,
            Color::Blue,
            Color::Green,
            Color::Yellow,
            Color::Red,
            Color::BrightRed,
        ])
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;
    use std::time::SystemTime;

    use super::*;
    use crate::record::Location;

    #[test]
    fn test_format_plain() {
        let layout = TextLayout::default()
            .no_color()
            .timezone(TimeZone::UTC)
            .timestamp_format(|ts, _| ts.as_second().to_string());

        let message = || "Hello warning!".to_string();
        let record = Record::builder()
            .time(SystemTime::UNIX_EPOCH + Duration::from_secs(1_723_387_497))
            .label("net")
            .level(Level::Warning)
            .location(Location::new(None, Some("examples/main.rs"), Some(52)))
            .message(&message)
            .build();

        let text = String::from_utf8(layout.format(&record).unwrap()).unwrap();
        insta::assert_snapshot!(text, @"1723387497  WARNING net: main.rs:52 Hello warning!");
    }

    #[test]
    fn test_default_timestamp_is_iso8601() {
        let ts = Timestamp::from_second(0).unwrap();
        let text = default_timestamp_format(ts, &TimeZone::UTC);
        assert!(text.starts_with("1970-01-01T00:00:00"), "{text}");
    }
}
