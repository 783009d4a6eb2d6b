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

//! Logroster is a small leveled logging facade built around labeled logger instances.
//!
//! # Overview
//!
//! A [`Logger`] has a label, a severity threshold and a pluggable [`Sink`]. Every logger
//! registers itself with a [`Registry`] when it is built and leaves it when its last handle is
//! dropped. The registry holds weak references only, so it can enumerate, look up and
//! reconfigure every live logger without keeping any of them alive.
//!
//! Messages are passed as closures and are only built once a record passes the logger's
//! threshold and the registry-wide disable switch.
//!
//! # Examples
//!
//! ```
//! use logroster::Level;
//! use logroster::Logger;
//!
//! let net = Logger::new("net");
//! let db = Logger::builder("db").level(Level::Error).build();
//!
//! net.debug(|| "connected");
//! db.debug(|| "not printed");
//!
//! logroster::warning!(net, "retrying in {}s", 5);
//!
//! Logger::set_level_for_all(Level::Trace);
//! db.debug(|| "printed now");
//! ```
//!
//! Custom sinks receive the whole [`Record`](record::Record):
//!
//! ```
//! use logroster::Logger;
//! use logroster::sink::CustomSink;
//!
//! let logger = Logger::builder("audit")
//!     .sink(CustomSink::new(|record| {
//!         eprintln!("<{}> {}", record.level(), record.message());
//!         Ok(())
//!     }))
//!     .build();
//! logger.notice(|| "user signed in");
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(missing_docs)]

pub mod layout;
pub mod record;
pub mod sink;
pub mod trap;

mod bridge;
mod error;
mod level;
mod logger;
mod macros;
mod registry;

pub use self::error::Error;
pub use self::layout::Layout;
pub use self::level::Level;
pub use self::logger::Logger;
pub use self::logger::LoggerBuilder;
pub use self::logger::LoggerId;
pub use self::registry::Registry;
pub use self::sink::Sink;
pub use self::trap::Trap;
