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

//! An example of one logger per subsystem, sharing a file and running on several threads.

use std::sync::Arc;
use std::thread;

use tierlog::Config;
use tierlog::Severity;

fn main() {
    let path = std::env::temp_dir().join("tierlog-subsystems.log");
    let subsystem = |tag: &str, threshold: Severity| Config {
        write_to_stdout: true,
        file_path: Some(path.clone()),
        component_tag: tag.to_string(),
        threshold,
        caller_location: true,
        microseconds: true,
        ..Default::default()
    };

    let net = Arc::new(subsystem("net", Severity::Debug).build().unwrap());
    let store = Arc::new(subsystem("store", Severity::Error).build().unwrap());

    let handles = (0..4)
        .map(|worker| {
            let net = net.clone();
            let store = store.clone();
            thread::spawn(move || {
                tierlog::debug!(net, "worker {worker} connected");
                tierlog::info!(store, "worker {worker} opened a segment (filtered)");
                store.error_ln(&[&"worker", &worker, &"hit a corrupt segment"]);
            })
        })
        .collect::<Vec<_>>();

    for handle in handles {
        handle.join().unwrap();
    }
}
