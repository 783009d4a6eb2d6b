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

//! The roster of live loggers.

use std::fmt;
use std::sync::Arc;
use std::sync::LazyLock;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;
use std::sync::Weak;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;

use crate::Level;
use crate::Logger;
use crate::logger::LoggerId;
use crate::logger::LoggerState;

static GLOBAL: LazyLock<Registry> = LazyLock::new(Registry::new);

/// A registry of every live [`Logger`] registered with it.
///
/// The registry only holds weak references: it never keeps a logger alive, and a logger
/// removes its own entry when its last handle is dropped. Entries keep insertion order.
///
/// Most programs only use [`Registry::global`], which is what [`Logger::new`] registers with.
/// An isolated registry can be created with [`Registry::new`] and passed to
/// [`LoggerBuilder::registry`](crate::LoggerBuilder::registry).
///
/// `Registry` is a cheap handle; clones share the same roster.
#[derive(Clone)]
pub struct Registry {
    shared: Arc<Shared>,
}

struct Shared {
    entries: Mutex<Vec<Entry>>,
    all_disabled: AtomicBool,
}

struct Entry {
    id: LoggerId,
    state: Weak<LoggerState>,
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("entries", &self.lock().len())
            .field("all_disabled", &self.all_disabled())
            .finish()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Create an empty registry, independent of the global one.
    pub fn new() -> Self {
        Self {
            shared: Arc::new(Shared {
                entries: Mutex::new(vec![]),
                all_disabled: AtomicBool::new(false),
            }),
        }
    }

    /// The process-wide registry.
    pub fn global() -> &'static Registry {
        &GLOBAL
    }

    /// Return every live logger, in the order they were created.
    ///
    /// The result is a snapshot: loggers created or dropped afterward are not reflected.
    pub fn loggers(&self) -> Vec<Logger> {
        let entries = self.lock();
        entries
            .iter()
            .filter_map(|entry| entry.state.upgrade())
            .map(Logger::from_state)
            .collect()
    }

    /// Return the first created live logger whose label equals `label`.
    ///
    /// Labels are not unique; the earliest registration wins.
    pub fn lookup(&self, label: &str) -> Option<Logger> {
        // loggers() releases the lock before any unmatched handle is dropped
        self.loggers()
            .into_iter()
            .find(|logger| logger.label().as_str() == label)
    }

    /// Set the level of every currently live logger.
    ///
    /// Loggers created afterward keep their own level.
    pub fn set_level_for_all(&self, level: Level) {
        for logger in self.loggers() {
            logger.set_level(level);
        }
    }

    /// Enable or disable every logger of this registry, including loggers created later.
    pub fn set_all_disabled(&self, disabled: bool) {
        self.shared.all_disabled.store(disabled, Ordering::Release);
    }

    /// Whether every logger of this registry is disabled.
    pub fn all_disabled(&self) -> bool {
        self.shared.all_disabled.load(Ordering::Acquire)
    }

    pub(crate) fn register(&self, id: LoggerId, state: Weak<LoggerState>) {
        self.lock().push(Entry { id, state });
    }

    pub(crate) fn deregister(&self, id: LoggerId) {
        let mut entries = self.lock();
        if let Some(pos) = entries.iter().position(|entry| entry.id == id) {
            entries.remove(pos);
        }
    }

    // registry state stays consistent across a panic in another holder
    fn lock(&self) -> MutexGuard<'_, Vec<Entry>> {
        self.shared
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
