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

use std::fs;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::MutexGuard;

use crate::Error;
use crate::ErrorKind;
use crate::sink::Sink;

/// A sink that appends log lines to a single file.
///
/// The file is opened in append mode and created if missing, with mode `0644` on Unix. Each line
/// is handed to the OS in one write, so lines from several processes appending to the same file
/// stay whole.
///
/// # Examples
///
/// ```
/// use tierlog::sink::File;
///
/// let dir = tempfile::tempdir().unwrap();
/// let file = File::open(dir.path().join("app.log")).unwrap();
/// assert!(file.path().ends_with("app.log"));
/// ```
#[derive(Debug)]
pub struct File {
    path: PathBuf,
    file: Mutex<fs::File>,
}

impl File {
    /// Open (or create) `path` for appending.
    ///
    /// # Errors
    ///
    /// Return an [`ErrorKind::Io`] error if the file cannot be opened, e.g. the parent directory
    /// is missing or not writable.
    pub fn open(path: impl Into<PathBuf>) -> Result<File, Error> {
        let path = path.into();
        let file = open_append(&path).map_err(|err| {
            Error::new(ErrorKind::Io, "failed to open log file")
                .with_context("path", path.display())
                .with_source(err)
        })?;

        Ok(File {
            path,
            file: Mutex::new(file),
        })
    }

    /// The path this sink was opened with.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn file(&self) -> MutexGuard<'_, fs::File> {
        self.file.lock().unwrap_or_else(|e| e.into_inner())
    }
}

fn open_append(path: &Path) -> std::io::Result<fs::File> {
    let mut options = OpenOptions::new();
    options.create(true).append(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }

    options.open(path)
}

impl Sink for File {
    fn write_line(&self, line: &[u8]) -> Result<(), Error> {
        let mut file = self.file();
        file.write_all(line).map_err(|err| {
            Error::from_io_error(err).with_context("path", self.path.display())
        })
    }

    fn flush(&self) -> Result<(), Error> {
        let mut file = self.file();
        file.flush().map_err(Error::from_io_error)
    }
}

impl Drop for File {
    fn drop(&mut self) {
        let file = self.file.get_mut().unwrap_or_else(|e| e.into_inner());
        let _ = file.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appends_to_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("append.log");
        fs::write(&path, "existing\n").unwrap();

        let file = File::open(&path).unwrap();
        file.write_line(b"appended\n").unwrap();
        drop(file);

        assert_eq!(fs::read_to_string(&path).unwrap(), "existing\nappended\n");
    }

    #[test]
    fn test_missing_parent_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("app.log");

        let err = File::open(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(err.to_string().contains("missing"), "{err}");
        assert_eq!(err.sources().len(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_created_with_0644() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mode.log");
        let _file = File::open(&path).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        // the process umask can only clear bits
        assert_eq!(mode & !0o644, 0);
        assert_eq!(mode & 0o600, 0o600);
    }
}
