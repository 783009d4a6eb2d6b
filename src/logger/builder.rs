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

use std::sync::Arc;
use std::sync::atomic::AtomicU8;

use arc_swap::ArcSwap;

use crate::Error;
use crate::Level;
use crate::Logger;
use crate::Registry;
use crate::Sink;
use crate::logger::LoggerId;
use crate::logger::LoggerState;
use crate::sink::Stdout;
use crate::trap::DefaultTrap;
use crate::trap::Trap;

/// A builder for configuring a [`Logger`].
///
/// # Examples
///
/// ```
/// use logroster::Level;
/// use logroster::Logger;
/// use logroster::sink::Stderr;
///
/// let logger = Logger::builder("db")
///     .level(Level::Warning)
///     .sink(Stderr::default())
///     .build();
/// assert_eq!(logger.level(), Level::Warning);
/// ```
#[must_use = "call `build` to construct and register the logger"]
#[derive(Debug)]
pub struct LoggerBuilder {
    label: String,
    level: Level,
    sink: Option<Box<dyn Sink>>,
    trap: Option<Box<dyn Trap>>,
    registry: Option<Registry>,
    // reported to the final trap on build
    env_error: Option<Error>,
}

impl LoggerBuilder {
    pub(crate) fn new(label: String) -> Self {
        Self {
            label,
            level: Level::default(),
            sink: None,
            trap: None,
            registry: None,
            env_error: None,
        }
    }

    /// Set the severity threshold. Default to [`Level::Debug`].
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Read the severity threshold from an environment variable.
    ///
    /// Keeps the current threshold if the variable is unset or not valid unicode. A value that
    /// does not name a level is otherwise ignored, and reported on [`build`](Self::build) to
    /// the trap the logger ends up with, wherever [`trap`](Self::trap) is called.
    ///
    /// # Examples
    ///
    /// ```
    /// use logroster::Level;
    /// use logroster::Logger;
    ///
    /// let logger = Logger::builder("app")
    ///     .level(Level::Notice)
    ///     .level_from_env("APP_LOG_LEVEL")
    ///     .build();
    /// ```
    pub fn level_from_env(mut self, key: &str) -> Self {
        let Ok(value) = std::env::var(key) else {
            return self;
        };

        match value.parse() {
            Ok(level) => {
                self.level = level;
                self.env_error = None;
            }
            Err(err) => self.env_error = Some(err.with_context("env", key)),
        }
        self
    }

    /// Set the sink. Default to [`Stdout`].
    pub fn sink(mut self, sink: impl Into<Box<dyn Sink>>) -> Self {
        self.sink = Some(sink.into());
        self
    }

    /// Set the trap for sink errors. Default to [`DefaultTrap`].
    pub fn trap(mut self, trap: impl Into<Box<dyn Trap>>) -> Self {
        self.trap = Some(trap.into());
        self
    }

    /// Register the logger with `registry` instead of [`Registry::global`].
    pub fn registry(mut self, registry: &Registry) -> Self {
        self.registry = Some(registry.clone());
        self
    }

    /// Build the logger and append it to its registry.
    pub fn build(self) -> Logger {
        let registry = self
            .registry
            .unwrap_or_else(|| Registry::global().clone());
        let sink = self
            .sink
            .unwrap_or_else(|| Box::new(Stdout::default()));
        let trap = self
            .trap
            .unwrap_or_else(|| Box::new(DefaultTrap::default()));
        if let Some(err) = self.env_error {
            trap.trap(&err);
        }

        let id = LoggerId::next();
        let state = Arc::new(LoggerState {
            id,
            label: ArcSwap::from_pointee(self.label),
            level: AtomicU8::new(self.level as u8),
            sink: ArcSwap::from_pointee(sink),
            trap,
            registry: registry.clone(),
        });
        registry.register(id, Arc::downgrade(&state));
        Logger::from_state(state)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[derive(Debug, Default, Clone)]
    struct SeenTrap(Arc<Mutex<Vec<String>>>);

    impl Trap for SeenTrap {
        fn trap(&self, err: &Error) {
            self.0.lock().unwrap().push(err.to_string());
        }
    }

    #[test]
    fn test_level_from_env_parses_valid_value() {
        const KEY: &str = "LOGROSTER_BUILDER_TEST_VALID_LEVEL";
        // SAFETY: no other test reads or writes this variable
        unsafe { std::env::set_var(KEY, "Warning") };

        let trap = SeenTrap::default();
        let logger = Logger::builder("env")
            .level_from_env(KEY)
            .trap(trap.clone())
            .registry(&Registry::new())
            .build();
        assert_eq!(logger.level(), Level::Warning);
        assert!(trap.0.lock().unwrap().is_empty());
    }

    #[test]
    fn test_level_from_env_reports_malformed_value_to_final_trap() {
        const KEY: &str = "LOGROSTER_BUILDER_TEST_MALFORMED_LEVEL";
        // SAFETY: no other test reads or writes this variable
        unsafe { std::env::set_var(KEY, "verbose") };

        let trap = SeenTrap::default();
        let logger = Logger::builder("env")
            .level(Level::Notice)
            .level_from_env(KEY)
            .trap(trap.clone())
            .registry(&Registry::new())
            .build();
        assert_eq!(logger.level(), Level::Notice);
        assert_eq!(
            *trap.0.lock().unwrap(),
            [format!(r#"malformed level: "verbose", context: {{ env: {KEY} }}"#)]
        );
    }

    #[test]
    fn test_level_from_env_keeps_level_when_unset() {
        let trap = SeenTrap::default();
        let logger = Logger::builder("env")
            .level(Level::Notice)
            .level_from_env("LOGROSTER_BUILDER_TEST_LEVEL_NEVER_SET")
            .trap(trap.clone())
            .registry(&Registry::new())
            .build();
        assert_eq!(logger.level(), Level::Notice);
        assert!(trap.0.lock().unwrap().is_empty());
    }
}
