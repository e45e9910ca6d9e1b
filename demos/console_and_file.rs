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

//! An example of logging to stdout and a file at the same time.

use tierlog::LeveledLogger;
use tierlog::Severity;

fn main() {
    let path = std::env::temp_dir().join("tierlog-console-and-file.log");
    let logger = match LeveledLogger::new(true, &path, "demo", Severity::Info) {
        Ok(logger) => logger,
        Err(err) => {
            eprintln!("cannot set up logging: {err}");
            std::process::exit(2);
        }
    };

    logger.error("Hello error!");
    logger.info("Hello info!");
    logger.debug("Hello debug! (filtered)");

    logger.set_threshold(Severity::Debug);
    tierlog::debug!(logger, "Hello debug! Lines also went to {}", path.display());
}
