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
use std::hash::Hash;
use std::hash::Hasher;
use std::sync::Arc;
use std::sync::atomic::AtomicU8;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use std::time::SystemTime;

use arc_swap::ArcSwap;

use crate::Level;
use crate::LoggerBuilder;
use crate::Registry;
use crate::Sink;
use crate::record::Location;
use crate::record::Record;
use crate::trap::Trap;

/// The process-unique identity of a [`Logger`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct LoggerId(u64);

impl LoggerId {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        LoggerId(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw id value.
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for LoggerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

pub(crate) struct LoggerState {
    pub(crate) id: LoggerId,
    pub(crate) label: ArcSwap<String>,
    pub(crate) level: AtomicU8,
    pub(crate) sink: ArcSwap<Box<dyn Sink>>,
    pub(crate) trap: Box<dyn Trap>,
    pub(crate) registry: Registry,
}

impl Drop for LoggerState {
    fn drop(&mut self) {
        self.registry.deregister(self.id);
    }
}

/// A labeled logger with its own severity threshold and sink.
///
/// A `Logger` is a cheap handle: clones refer to the same logger, compare equal and hash the
/// same. The logger lives until its last handle is dropped, at which point it leaves its
/// [`Registry`]. The registry itself never keeps a logger alive.
///
/// Every log call checks two guards before doing anything else: the registry's
/// [`all_disabled`](Registry::all_disabled) switch, and the logger's own [`level`](Logger::level).
/// When either rejects the call, the message closure is not run.
///
/// # Examples
///
/// ```
/// use logroster::Level;
/// use logroster::Logger;
///
/// let cache = Logger::new("cache");
/// cache.debug(|| "warmed up");
///
/// let store = Logger::builder("object_store").level(Level::Error).build();
/// store.debug(|| format!("{} keys", 42)); // below the threshold, never formatted
///
/// assert_eq!(Logger::lookup("object_store"), Some(store));
/// ```
#[derive(Clone)]
pub struct Logger {
    state: Arc<LoggerState>,
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("id", &self.state.id)
            .field("label", &**self.state.label.load())
            .field("level", &self.level())
            .field("sink", &**self.state.sink.load())
            .finish()
    }
}

impl PartialEq for Logger {
    fn eq(&self, other: &Self) -> bool {
        self.state.id == other.state.id
    }
}

impl Eq for Logger {}

impl Hash for Logger {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.state.id.hash(state);
    }
}

impl Logger {
    /// Create a logger at [`Level::Debug`] that prints to stdout, registered globally.
    pub fn new(label: impl Into<String>) -> Logger {
        Logger::builder(label).build()
    }

    /// Create a [`LoggerBuilder`] for a logger with the given label.
    pub fn builder(label: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder::new(label.into())
    }

    pub(crate) fn from_state(state: Arc<LoggerState>) -> Logger {
        Logger { state }
    }

    /// The identity of this logger.
    pub fn id(&self) -> LoggerId {
        self.state.id
    }

    /// The current label.
    pub fn label(&self) -> Arc<String> {
        self.state.label.load_full()
    }

    /// Change the label.
    pub fn set_label(&self, label: impl Into<String>) {
        self.state.label.store(Arc::new(label.into()));
    }

    /// The current severity threshold.
    pub fn level(&self) -> Level {
        Level::from_u8(self.state.level.load(Ordering::Relaxed))
    }

    /// Change the severity threshold.
    pub fn set_level(&self, level: Level) {
        self.state.level.store(level as u8, Ordering::Relaxed);
    }

    /// Replace the sink.
    ///
    /// Calls already in flight finish with the previous sink.
    pub fn set_sink(&self, sink: impl Into<Box<dyn Sink>>) {
        self.state.sink.store(Arc::new(sink.into()));
    }

    /// The registry this logger belongs to.
    pub fn registry(&self) -> &Registry {
        &self.state.registry
    }

    /// Whether a message at `level` would reach the sink.
    pub fn enabled(&self, level: Level) -> bool {
        !self.state.registry.all_disabled() && level >= self.level()
    }

    /// Log a message at `level`, recording the caller's file and line.
    ///
    /// Unless the level is only known at runtime, prefer the per-level methods such as
    /// [`debug`](Logger::debug) or the [`log!`](crate::log!) family of macros.
    #[track_caller]
    pub fn log<F, M>(&self, level: Level, message: F)
    where
        F: Fn() -> M,
        M: Into<String>,
    {
        self.log_at(level, Location::caller(), message);
    }

    /// Log a message at `level` with an explicit call-site.
    ///
    /// `message` runs only if the record passes the guards, and then only when the sink asks.
    pub fn log_at<F, M>(&self, level: Level, location: Location<'_>, message: F)
    where
        F: Fn() -> M,
        M: Into<String>,
    {
        if !self.enabled(level) {
            return;
        }

        let thunk = || -> String { message().into() };
        let label = self.state.label.load();
        let record = Record::builder()
            .time(SystemTime::now())
            .label(label.as_str())
            .level(level)
            .location(location)
            .message(&thunk)
            .build();

        let sink = self.state.sink.load();
        if let Err(err) = sink.emit(&record) {
            let err = err
                .with_context("label", label.as_str())
                .with_context("level", level);
            self.state.trap.trap(&err);
        }
    }

    /// Log a trace message.
    #[track_caller]
    pub fn trace<F, M>(&self, message: F)
    where
        F: Fn() -> M,
        M: Into<String>,
    {
        self.log_at(Level::Trace, Location::caller(), message);
    }

    /// Log a debugging message.
    #[track_caller]
    pub fn debug<F, M>(&self, message: F)
    where
        F: Fn() -> M,
        M: Into<String>,
    {
        self.log_at(Level::Debug, Location::caller(), message);
    }

    /// Log a notice message.
    #[track_caller]
    pub fn notice<F, M>(&self, message: F)
    where
        F: Fn() -> M,
        M: Into<String>,
    {
        self.log_at(Level::Notice, Location::caller(), message);
    }

    /// Log a warning message.
    #[track_caller]
    pub fn warning<F, M>(&self, message: F)
    where
        F: Fn() -> M,
        M: Into<String>,
    {
        self.log_at(Level::Warning, Location::caller(), message);
    }

    /// Log an error message.
    #[track_caller]
    pub fn error<F, M>(&self, message: F)
    where
        F: Fn() -> M,
        M: Into<String>,
    {
        self.log_at(Level::Error, Location::caller(), message);
    }

    /// Log a critical error message.
    #[track_caller]
    pub fn critical<F, M>(&self, message: F)
    where
        F: Fn() -> M,
        M: Into<String>,
    {
        self.log_at(Level::Critical, Location::caller(), message);
    }

    /// Log `text` at [`Level::Trace`].
    ///
    /// This makes a logger usable wherever a plain text sink is expected. See also the
    /// [`fmt::Write`] implementations: each `write!` call becomes one trace record.
    #[track_caller]
    pub fn write(&self, text: &str) {
        self.log_at(Level::Trace, Location::caller(), || text);
    }

    /// Flush the sink.
    pub fn flush(&self) {
        if let Err(err) = self.state.sink.load().flush() {
            let err = err.with_context("label", self.state.label.load().as_str());
            self.state.trap.trap(&err);
        }
    }

    /// Return every live logger of the global registry, in creation order.
    ///
    /// See [`Registry::loggers`].
    pub fn all_loggers() -> Vec<Logger> {
        Registry::global().loggers()
    }

    /// Return the first created live logger of the global registry with the given label.
    ///
    /// See [`Registry::lookup`].
    pub fn lookup(label: &str) -> Option<Logger> {
        Registry::global().lookup(label)
    }

    /// Set the level of every currently live logger of the global registry.
    ///
    /// Loggers created afterward are not affected. See [`Registry::set_level_for_all`].
    pub fn set_level_for_all(level: Level) {
        Registry::global().set_level_for_all(level);
    }

    /// Enable or disable every logger of the global registry, including future ones.
    pub fn set_all_disabled(disabled: bool) {
        Registry::global().set_all_disabled(disabled);
    }

    /// Whether every logger of the global registry is disabled.
    pub fn all_disabled() -> bool {
        Registry::global().all_disabled()
    }
}

impl fmt::Write for Logger {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        fmt::Write::write_str(&mut &*self, s)
    }

    fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> fmt::Result {
        fmt::Write::write_fmt(&mut &*self, args)
    }
}

impl fmt::Write for &Logger {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.log_at(Level::Trace, Location::default(), || s);
        Ok(())
    }

    // one record per `write!`, not one per format fragment
    fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> fmt::Result {
        self.log_at(Level::Trace, Location::default(), || fmt::format(args));
        Ok(())
    }
}
