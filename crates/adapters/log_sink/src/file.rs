//! File logger — appends every message to a text file.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use powerhub_app::ports::Logger;

/// Appends `[File] <message>` lines to a file opened once at construction.
///
/// The file is opened in append mode so successive runs accumulate history.
/// When it cannot be opened, every log call is silently dropped. The handle
/// is closed when the logger is dropped.
pub struct FileLogger {
    path: PathBuf,
    file: Option<File>,
}

impl FileLogger {
    /// Open (or create) `path` for appending.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let file = match OpenOptions::new().create(true).append(true).open(&path) {
            Ok(file) => Some(file),
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "unable to open log file, log lines will be dropped"
                );
                None
            }
        };
        Self { path, file }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the destination was opened successfully.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.file.is_some()
    }
}

impl Logger for FileLogger {
    fn log(&self, message: &str) {
        let Some(file) = &self.file else {
            return;
        };
        let mut handle: &File = file;
        if let Err(err) = handle.write_all(format!("[File] {message}\n").as_bytes()) {
            tracing::warn!(path = %self.path.display(), error = %err, "unable to append log line");
        }
    }
}
