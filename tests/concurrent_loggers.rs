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
use std::sync::Barrier;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::thread;

use logroster::Level;
use logroster::Logger;
use logroster::Registry;
use logroster::sink::CustomSink;

#[test]
fn test_concurrent_create_drop_and_enumerate() {
    let registry = Registry::new();
    let keep = Logger::builder("keep").registry(&registry).build();

    let threads = 8;
    let barrier = Arc::new(Barrier::new(threads + 1));
    let handles: Vec<_> = (0..threads)
        .map(|i| {
            let registry = registry.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                for n in 0..200 {
                    let logger = Logger::builder(format!("worker-{i}-{n}"))
                        .registry(&registry)
                        .build();
                    logger.set_level(Level::Error);
                    // enumerate while other threads create and drop
                    let _ = registry.lookup("keep");
                }
            })
        })
        .collect();

    barrier.wait();
    for _ in 0..200 {
        registry.set_level_for_all(Level::Notice);
        let _ = registry.loggers();
    }
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(registry.loggers(), [keep.clone()]);
    drop(keep);
    assert!(registry.loggers().is_empty());
}

#[test]
fn test_concurrent_logging_through_one_logger() {
    let registry = Registry::new();
    let emitted = Arc::new(AtomicUsize::new(0));

    let counter = emitted.clone();
    let logger = Logger::builder("shared")
        .level(Level::Notice)
        .sink(CustomSink::new(move |record| {
            assert!(record.level() >= Level::Notice);
            counter.fetch_add(1, Ordering::Relaxed);
            Ok(())
        }))
        .registry(&registry)
        .build();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let logger = logger.clone();
            thread::spawn(move || {
                for n in 0..100 {
                    logger.debug(|| format!("skipped {n}"));
                    logger.warning(|| format!("kept {n}"));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(emitted.load(Ordering::Relaxed), 400);
    assert_eq!(registry.loggers().len(), 1);
}

#[test]
fn test_last_handle_dropped_on_another_thread() {
    let registry = Registry::new();
    let logger = Logger::builder("moved").registry(&registry).build();
    let id = logger.id();

    thread::spawn(move || drop(logger)).join().unwrap();
    assert!(registry.loggers().iter().all(|logger| logger.id() != id));
    assert!(registry.lookup("moved").is_none());
}
