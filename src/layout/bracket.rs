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

use crate::Error;
use crate::Layout;
use crate::record::Record;

/// The default layout of the standard output sink.
///
/// Output format:
///
/// ```text
/// [net: debug: my_app::net line 42] connected
/// [db: error: store.rs line 7] query failed
/// [db: notice: unknown] no call-site known
/// ```
///
/// The call-site is the module path when known, else the file name, else `unknown`.
///
/// # Examples
///
/// ```
/// use logroster::layout::BracketLayout;
///
/// let layout = BracketLayout::default();
/// ```
#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub struct BracketLayout {}

impl Layout for BracketLayout {
    fn format(&self, record: &Record) -> Result<Vec<u8>, Error> {
        let mut text = String::new();

        let label = record.label();
        let level = record.level();
        write!(&mut text, "[{label}: {level}: ").map_err(Error::from_fmt_error)?;

        let filename = record.filename();
        let site = match record.module_path() {
            Some(module_path) => module_path,
            None if !filename.is_empty() => filename.as_ref(),
            None => "unknown",
        };
        text.push_str(site);

        if let Some(line) = record.line() {
            write!(&mut text, " line {line}").map_err(Error::from_fmt_error)?;
        }

        text.push_str("] ");
        text.push_str(&record.message());
        Ok(text.into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Level;
    use crate::record::Location;

    fn render(record: &Record) -> String {
        String::from_utf8(BracketLayout::default().format(record).unwrap()).unwrap()
    }

    #[test]
    fn test_format_with_module_path() {
        let message = || "connected".to_string();
        let record = Record::builder()
            .label("net")
            .level(Level::Debug)
            .location(Location::new(Some("my_app::net"), Some("src/net.rs"), Some(42)))
            .message(&message)
            .build();
        insta::assert_snapshot!(render(&record), @"[net: debug: my_app::net line 42] connected");
    }

    #[test]
    fn test_format_falls_back_to_file_then_unknown() {
        let message = || "query failed".to_string();
        let record = Record::builder()
            .label("db")
            .level(Level::Error)
            .location(Location::new(None, Some("src/store.rs"), Some(7)))
            .message(&message)
            .build();
        insta::assert_snapshot!(render(&record), @"[db: error: store.rs line 7] query failed");

        let record = record.to_builder().location(Location::default()).build();
        insta::assert_snapshot!(render(&record), @"[db: error: unknown] query failed");
    }
}
