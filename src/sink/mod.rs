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

//! Sinks turn log records into visible output.

use std::fmt;

use crate::Error;
use crate::record::Record;

mod custom;
mod stdio;
mod testing;

pub use self::custom::CustomSink;
pub use self::stdio::Stderr;
pub use self::stdio::Stdout;
pub use self::testing::Testing;

/// A sink that can process log records.
///
/// A [`Logger`](crate::Logger) calls its sink only for records past its level and the
/// global disable switch. The sink owns the output format and destination, and decides
/// whether to evaluate the deferred [`message`](Record::message) at all.
///
/// Sinks may be called from many threads at once and must serialize their own output.
pub trait Sink: fmt::Debug + Send + Sync + 'static {
    /// Emit a log record.
    fn emit(&self, record: &Record) -> Result<(), Error>;

    /// Flush any buffered records.
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
