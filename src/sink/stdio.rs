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

use std::io::Write;

use crate::Error;
use crate::Layout;
use crate::layout::BracketLayout;
use crate::record::Record;
use crate::sink::Sink;

/// A sink that prints log records to stdout.
///
/// This is the sink a [`Logger`](crate::Logger) gets when none is configured.
///
/// # Examples
///
/// ```
/// use logroster::sink::Stdout;
///
/// let stdout_sink = Stdout::default();
/// ```
#[derive(Debug)]
pub struct Stdout {
    layout: Box<dyn Layout>,
}

impl Default for Stdout {
    fn default() -> Self {
        Self {
            layout: Box::new(BracketLayout::default()),
        }
    }
}

impl Stdout {
    /// Set the layout for the [`Stdout`] sink.
    ///
    /// Default to [`BracketLayout`].
    ///
    /// # Examples
    ///
    /// ```
    /// use logroster::layout::TextLayout;
    /// use logroster::sink::Stdout;
    ///
    /// let stdout_sink = Stdout::default().with_layout(TextLayout::default());
    /// ```
    pub fn with_layout(mut self, layout: impl Into<Box<dyn Layout>>) -> Self {
        self.layout = layout.into();
        self
    }
}

impl Sink for Stdout {
    fn emit(&self, record: &Record) -> Result<(), Error> {
        write_record(&mut std::io::stdout().lock(), self.layout.as_ref(), record)
    }

    fn flush(&self) -> Result<(), Error> {
        std::io::stdout().flush().map_err(Error::from_io_error)
    }
}

/// A sink that prints log records to stderr.
///
/// # Examples
///
/// ```
/// use logroster::sink::Stderr;
///
/// let stderr_sink = Stderr::default();
/// ```
#[derive(Debug)]
pub struct Stderr {
    layout: Box<dyn Layout>,
}

impl Default for Stderr {
    fn default() -> Self {
        Self {
            layout: Box::new(BracketLayout::default()),
        }
    }
}

impl Stderr {
    /// Set the layout for the [`Stderr`] sink.
    ///
    /// Default to [`BracketLayout`].
    pub fn with_layout(mut self, layout: impl Into<Box<dyn Layout>>) -> Self {
        self.layout = layout.into();
        self
    }
}

impl Sink for Stderr {
    fn emit(&self, record: &Record) -> Result<(), Error> {
        write_record(&mut std::io::stderr().lock(), self.layout.as_ref(), record)
    }

    fn flush(&self) -> Result<(), Error> {
        std::io::stderr().flush().map_err(Error::from_io_error)
    }
}

// one write_all per record keeps lines from interleaving across threads
fn write_record(stream: &mut impl Write, layout: &dyn Layout, record: &Record) -> Result<(), Error> {
    let mut bytes = layout.format(record)?;
    bytes.push(b'\n');
    stream.write_all(&bytes).map_err(Error::from_io_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Level;

    #[test]
    fn test_write_record_appends_newline() {
        let message = || "ready".to_string();
        let record = Record::builder()
            .label("stdio")
            .level(Level::Notice)
            .message(&message)
            .build();

        let mut buf = vec![];
        write_record(&mut buf, &BracketLayout::default(), &record).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "[stdio: notice: unknown] ready\n");
    }
}
