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

use crate::Error;
use crate::record::Record;
use crate::sink::Sink;

/// A sink that you can pass the custom emit function.
///
/// The function receives every record that passed the logger's guards. For example:
///
/// ```
/// use logroster::Logger;
/// use logroster::sink::CustomSink;
///
/// let logger = Logger::builder("net")
///     .sink(CustomSink::new(|record| {
///         println!("{} says {}", record.label(), record.message());
///         Ok(())
///     }))
///     .build();
/// logger.notice(|| "hello");
/// ```
pub struct CustomSink {
    f: Box<dyn Fn(&Record) -> Result<(), Error> + Send + Sync + 'static>,
}

impl fmt::Debug for CustomSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CustomSink {{ ... }}")
    }
}

impl CustomSink {
    /// Create a sink from an emit function.
    pub fn new(f: impl Fn(&Record) -> Result<(), Error> + Send + Sync + 'static) -> Self {
        CustomSink { f: Box::new(f) }
    }
}

impl Sink for CustomSink {
    fn emit(&self, record: &Record) -> Result<(), Error> {
        (self.f)(record)
    }
}
