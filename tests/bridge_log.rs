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

use tierlog::Severity;
use tierlog::sink::Buffer;

// The `log` facade holds one global logger per process, so everything runs in one test.
#[test]
fn test_log_facade_goes_through_the_threshold() {
    let buffer = Buffer::default();
    let logger = Arc::new(
        tierlog::builder("facade")
            .threshold(Severity::Info)
            .caller_location(true)
            .sink(buffer.clone())
            .build()
            .unwrap(),
    );
    tierlog::bridge::install(logger.clone()).unwrap();

    let line = line!() + 1;
    log::info!("hello {}", "facade");
    log::debug!("hidden");
    log::warn!("warned");

    logger.set_threshold(Severity::Debug);
    log::trace!("now visible");

    logger.set_threshold(Severity::None);
    log::error!("silenced");

    let lines = buffer.lines();
    assert_eq!(lines.len(), 3, "{lines:?}");
    assert!(
        lines[0].ends_with(&format!("[facade/bridge_log.rs:{line}] hello facade")),
        "{}",
        lines[0]
    );
    assert!(lines[1].ends_with("warned"));
    assert!(lines[2].ends_with("now visible"));

    // a second install is rejected
    let err = tierlog::bridge::install(logger).unwrap_err();
    assert_eq!(err.kind(), tierlog::ErrorKind::Unexpected);
}
