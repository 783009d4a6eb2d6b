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
use std::sync::Mutex;

use log::Log;
use logroster::Level;
use logroster::Logger;
use logroster::Registry;
use logroster::sink::CustomSink;

#[test]
fn test_log_records_are_forwarded() {
    let registry = Registry::new();
    let seen = Arc::new(Mutex::new(vec![]));

    let sink_seen = seen.clone();
    let logger = Logger::builder("bridge")
        .level(Level::Notice)
        .sink(CustomSink::new(move |record| {
            sink_seen.lock().unwrap().push((
                record.level(),
                record.message(),
                record.module_path().map(str::to_string),
                record.line(),
            ));
            Ok(())
        }))
        .registry(&registry)
        .build();

    assert!(!Log::enabled(
        &logger,
        &log::Metadata::builder().level(log::Level::Debug).build()
    ));
    assert!(Log::enabled(
        &logger,
        &log::Metadata::builder().level(log::Level::Info).build()
    ));

    Log::log(
        &logger,
        &log::Record::builder()
            .args(format_args!("disk at {}%", 91))
            .level(log::Level::Warn)
            .module_path_static(Some("app::disk"))
            .line(Some(12))
            .build(),
    );
    Log::log(
        &logger,
        &log::Record::builder()
            .args(format_args!("dropped"))
            .level(log::Level::Debug)
            .build(),
    );

    let seen = seen.lock().unwrap().clone();
    assert_eq!(
        seen,
        [(
            Level::Warning,
            "disk at 91%".to_string(),
            Some("app::disk".to_string()),
            Some(12)
        )]
    );
}

#[test]
fn test_level_mapping() {
    assert_eq!(Level::from(log::Level::Error), Level::Error);
    assert_eq!(Level::from(log::Level::Warn), Level::Warning);
    assert_eq!(Level::from(log::Level::Info), Level::Notice);
    assert_eq!(Level::from(log::Level::Debug), Level::Debug);
    assert_eq!(Level::from(log::Level::Trace), Level::Trace);
}

#[test]
fn test_apply_installs_backend_once() {
    let registry = Registry::new();
    let seen = Arc::new(Mutex::new(vec![]));

    let sink_seen = seen.clone();
    let logger = Logger::builder("installed")
        .level(Level::Notice)
        .sink(CustomSink::new(move |record| {
            sink_seen
                .lock()
                .unwrap()
                .push((record.label().to_string(), record.level(), record.message()));
            Ok(())
        }))
        .registry(&registry)
        .build();

    logger.apply().unwrap();
    log::warn!("queue depth {}", 17);
    log::debug!("below notice");

    assert_eq!(
        *seen.lock().unwrap(),
        [(
            "installed".to_string(),
            Level::Warning,
            "queue depth 17".to_string()
        )]
    );

    assert!(logger.apply().is_err());
}
