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

//! Log record and call-site location.

use std::borrow::Cow;
use std::fmt;
use std::time::SystemTime;

use crate::Level;

/// Where a log call was made.
///
/// Every field is best-effort. The per-level methods on [`Logger`](crate::Logger) fill in the
/// file and line of their caller, and the logging macros add the module path as well.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug)]
pub struct Location<'a> {
    module_path: Option<&'a str>,
    file: Option<&'a str>,
    line: Option<u32>,
}

impl<'a> Location<'a> {
    /// Create a location from its parts.
    pub const fn new(module_path: Option<&'a str>, file: Option<&'a str>, line: Option<u32>) -> Self {
        Self {
            module_path,
            file,
            line,
        }
    }

    /// The module path of the call site.
    pub fn module_path(&self) -> Option<&'a str> {
        self.module_path
    }

    /// The source file of the call site.
    pub fn file(&self) -> Option<&'a str> {
        self.file
    }

    /// The line of the call site.
    pub fn line(&self) -> Option<u32> {
        self.line
    }
}

impl Location<'static> {
    /// The location of the caller, as tracked by `#[track_caller]`.
    #[track_caller]
    pub fn caller() -> Self {
        let caller = std::panic::Location::caller();
        Self {
            module_path: None,
            file: Some(caller.file()),
            line: Some(caller.line()),
        }
    }
}

fn empty_message() -> String {
    String::new()
}

/// A log event handed to a [`Sink`](crate::Sink).
///
/// The message is not built yet: [`Record::message`] runs the thunk passed to the log call.
/// A sink that drops the record never pays for building the message.
#[derive(Clone, Copy)]
pub struct Record<'a> {
    // the observed time
    now: SystemTime,

    // the metadata
    label: &'a str,
    level: Level,
    location: Location<'a>,

    // the payload, deferred
    message: &'a dyn Fn() -> String,
}

impl fmt::Debug for Record<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("now", &self.now)
            .field("label", &self.label)
            .field("level", &self.level)
            .field("location", &self.location)
            .finish_non_exhaustive()
    }
}

impl<'a> Record<'a> {
    /// The observed time.
    pub fn time(&self) -> SystemTime {
        self.now
    }

    /// The label of the logger that produced this record.
    pub fn label(&self) -> &'a str {
        self.label
    }

    /// The severity of the message.
    pub fn level(&self) -> Level {
        self.level
    }

    /// The call-site of the log call.
    pub fn location(&self) -> Location<'a> {
        self.location
    }

    /// The module path of the call site.
    pub fn module_path(&self) -> Option<&'a str> {
        self.location.module_path
    }

    /// The source file of the call site.
    pub fn file(&self) -> Option<&'a str> {
        self.location.file
    }

    /// The filename of the source file.
    pub fn filename(&self) -> Cow<'a, str> {
        self.file()
            .map(std::path::Path::new)
            .and_then(std::path::Path::file_name)
            .map(std::ffi::OsStr::to_string_lossy)
            .unwrap_or_default()
    }

    /// The line of the call site.
    pub fn line(&self) -> Option<u32> {
        self.location.line
    }

    /// Build the message body.
    ///
    /// Every call evaluates the deferred message again.
    pub fn message(&self) -> String {
        (self.message)()
    }

    /// Create a builder initialized with the current record's values.
    pub fn to_builder(&self) -> RecordBuilder<'a> {
        RecordBuilder { record: *self }
    }

    /// Returns a new builder.
    pub fn builder() -> RecordBuilder<'a> {
        RecordBuilder::default()
    }
}

/// Builder for [`Record`].
#[derive(Debug)]
pub struct RecordBuilder<'a> {
    record: Record<'a>,
}

impl Default for RecordBuilder<'_> {
    fn default() -> Self {
        RecordBuilder {
            record: Record {
                now: SystemTime::now(),
                label: "",
                level: Level::default(),
                location: Location::default(),
                message: &empty_message,
            },
        }
    }
}

impl<'a> RecordBuilder<'a> {
    /// Set [`time`](Record::time).
    pub fn time(mut self, now: SystemTime) -> Self {
        self.record.now = now;
        self
    }

    /// Set [`label`](Record::label).
    pub fn label(mut self, label: &'a str) -> Self {
        self.record.label = label;
        self
    }

    /// Set [`level`](Record::level).
    pub fn level(mut self, level: Level) -> Self {
        self.record.level = level;
        self
    }

    /// Set [`location`](Record::location).
    pub fn location(mut self, location: Location<'a>) -> Self {
        self.record.location = location;
        self
    }

    /// Set the deferred message.
    pub fn message(mut self, message: &'a dyn Fn() -> String) -> Self {
        self.record.message = message;
        self
    }

    /// Invoke the builder and return a `Record`.
    pub fn build(self) -> Record<'a> {
        self.record
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn test_message_is_deferred() {
        let calls = Cell::new(0);
        let message = || {
            calls.set(calls.get() + 1);
            "payload".to_string()
        };

        let record = Record::builder()
            .label("net")
            .level(Level::Notice)
            .message(&message)
            .build();
        assert_eq!(calls.get(), 0);

        assert_eq!(record.message(), "payload");
        assert_eq!(record.message(), "payload");
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_default_record_is_empty() {
        let record = Record::builder().build();
        assert_eq!(record.label(), "");
        assert_eq!(record.level(), Level::Debug);
        assert_eq!(record.message(), "");
        assert_eq!(record.location(), Location::default());
        assert_eq!(record.filename(), "");
    }

    #[test]
    fn test_caller_location_points_here() {
        let location = Location::caller();
        assert_eq!(location.file(), Some(file!()));
        assert_eq!(location.line(), Some(line!() - 2));
        assert_eq!(location.module_path(), None);
    }

    #[test]
    fn test_filename_strips_directories() {
        let record = Record::builder()
            .location(Location::new(None, Some("src/net/conn.rs"), Some(7)))
            .build();
        assert_eq!(record.filename(), "conn.rs");
        assert_eq!(record.to_builder().level(Level::Error).build().line(), Some(7));
    }
}
