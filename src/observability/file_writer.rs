//! Append-only line writer with size-based rotation.
//!
//! When the trace file grows past its limit it is renamed to
//! `<name>.<UTC timestamp>` (for example `folio-otlp.json.20261018T130455123`)
//! and a fresh file is started. Timestamps sort chronologically as plain
//! strings, so retention keeps the lexically greatest backups.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::Utc;

/// Rotate once the file exceeds 10 MB.
pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Backups retained after rotation.
pub const MAX_BACKUP_FILES: usize = 3;

const TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%S%3f";

/// Thread-safe rotating file writer. The file is opened lazily on first write.
pub struct FileWriter {
    file_path: PathBuf,
    max_bytes: u64,
    keep: usize,
    writer: Mutex<Option<File>>,
}

impl FileWriter {
    #[must_use]
    pub const fn new(file_path: PathBuf) -> Self {
        Self::with_limits(file_path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    #[must_use]
    pub const fn with_limits(file_path: PathBuf, max_bytes: u64, keep: usize) -> Self {
        Self {
            file_path,
            max_bytes,
            keep,
            writer: Mutex::new(None),
        }
    }

    /// Appends `line` plus a newline, rotating first if the file is full.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from rotating, opening or writing, or an error
    /// if the lock was poisoned.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("writer lock poisoned: {e}")))?;

        if self.needs_rotation() {
            *writer = None;
            self.rotate()?;
        }

        let file = match writer.take() {
            Some(file) => file,
            None => OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)?,
        };
        let file = writer.insert(file);

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn needs_rotation(&self) -> bool {
        fs::metadata(&self.file_path).is_ok_and(|m| m.len() > self.max_bytes)
    }

    fn rotate(&self) -> io::Result<()> {
        let stamp = Utc::now().format(TIMESTAMP_FORMAT);
        let mut backup = self.file_path.clone().into_os_string();
        backup.push(format!(".{stamp}"));

        fs::rename(&self.file_path, PathBuf::from(backup))?;
        self.prune_backups()
    }

    /// Deletes all but the newest `keep` backups. Removal errors are ignored
    /// so one stuck file does not block the rest.
    fn prune_backups(&self) -> io::Result<()> {
        let mut backups = backups_of(&self.file_path)?;
        backups.sort_unstable_by(|a, b| b.cmp(a));

        for stale in backups.iter().skip(self.keep) {
            let _ = fs::remove_file(stale);
        }
        Ok(())
    }
}

/// Lists the rotated backups of `path`, in no particular order.
fn backups_of(path: &Path) -> io::Result<Vec<PathBuf>> {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let prefix = path
        .file_name()
        .and_then(|n| n.to_str())
        .map(|n| format!("{n}."))
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "trace file has no name"))?;

    Ok(fs::read_dir(parent)?
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .filter(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with(&prefix))
        })
        .collect())
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .field("max_bytes", &self.max_bytes)
            .field("keep", &self.keep)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn appends_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("folio-otlp.json");
        let writer = FileWriter::new(path.clone());

        writer.write_line("{\"a\":1}").unwrap();
        writer.write_line("{\"b\":2}").unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "{\"a\":1}\n{\"b\":2}\n");
    }

    #[test]
    fn rotates_past_limit() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("folio-otlp.json");
        let writer = FileWriter::with_limits(path.clone(), 8, 3);

        writer.write_line("0123456789").unwrap();
        writer.write_line("next").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "next\n");
        let backups = backups_of(&path).unwrap();
        assert_eq!(backups.len(), 1);
        assert_eq!(fs::read_to_string(&backups[0]).unwrap(), "0123456789\n");
    }

    #[test]
    fn keeps_newest_backups() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("folio-otlp.json");
        for stamp in ["20000101T000000000", "20000102T000000000", "20000103T000000000"] {
            fs::write(dir.path().join(format!("folio-otlp.json.{stamp}")), "old").unwrap();
        }
        fs::write(dir.path().join("unrelated.json.20200101T000000000"), "x").unwrap();

        let writer = FileWriter::with_limits(path.clone(), 0, 2);
        fs::write(&path, "full\n").unwrap();
        writer.write_line("fresh").unwrap();

        let mut names: Vec<String> = backups_of(&path)
            .unwrap()
            .iter()
            .filter_map(|p| p.file_name()?.to_str().map(String::from))
            .collect();
        names.sort();

        assert_eq!(names.len(), 2);
        assert_eq!(names[0], "folio-otlp.json.20000103T000000000");
        assert!(dir.path().join("unrelated.json.20200101T000000000").exists());
    }
}
