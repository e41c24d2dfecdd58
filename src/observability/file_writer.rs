//! Append-only line writer with size-based rotation.
//!
//! Trace output grows without bound over a long Zellij session, so the live
//! file is renamed aside once it passes a size threshold and only a few
//! backups are kept.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Size at which the trace file is rotated (10 MB).
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Rotated files kept next to the live one.
const MAX_BACKUP_FILES: usize = 3;

/// Appends lines to a file, rotating it once it grows past
/// [`MAX_FILE_SIZE_BYTES`].
///
/// Rotated files are named `<stem>.<UTC timestamp>.json`; only the newest
/// [`MAX_BACKUP_FILES`] are kept. The file is opened lazily on first write.
///
/// # Thread Safety
///
/// The handle sits behind a `Mutex`; the plugin and worker threads may share
/// one writer.
///
/// # Rotation Strategy
///
/// 1. Before each write, check the size of the live file
/// 2. Past the threshold:
///    - close the handle
///    - rename the file to `<stem>.<stamp>.json`
///    - delete all but the newest backups
/// 3. Reopen the live path and append
///
/// # Example
///
/// ```rust
/// use std::path::PathBuf;
///
/// let writer = FileWriter::new(PathBuf::from("/tmp/recipe-explorer-otlp.json"));
/// writer.write_line("{\"resourceSpans\": []}").unwrap();
/// ```
pub struct FileWriter {
    /// Path of the live trace file.
    file_path: PathBuf,

    /// Handle to the live file, `None` until the first write or after a
    /// rotation.
    file: Mutex<Option<File>>,
}

impl FileWriter {
    /// Creates a writer for `file_path` without touching the filesystem.
    pub const fn new(file_path: PathBuf) -> Self {
        Self {
            file_path,
            file: Mutex::new(None),
        }
    }

    /// Appends `line` plus a newline and flushes.
    ///
    /// # Errors
    ///
    /// Returns an error if rotation, opening or writing fails, or if the lock
    /// was poisoned.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("trace writer lock poisoned: {e}")))?;

        if self.needs_rotation() {
            *guard = None;
            self.rotate()?;
        }

        if guard.is_none() {
            *guard = Some(OpenOptions::new().create(true).append(true).open(&self.file_path)?);
        }
        let Some(file) = guard.as_mut() else {
            return Err(io::Error::new(io::ErrorKind::Other, "trace file not open"));
        };

        writeln!(file, "{line}")?;
        file.flush()
    }

    /// `true` once the live file exceeds [`MAX_FILE_SIZE_BYTES`]. A missing
    /// file never needs rotation.
    fn needs_rotation(&self) -> bool {
        fs::metadata(&self.file_path).is_ok_and(|m| m.len() > MAX_FILE_SIZE_BYTES)
    }

    /// Renames the live file aside and prunes old backups.
    ///
    /// # Errors
    ///
    /// Returns an error if the rename fails or the directory cannot be
    /// listed. Failures to delete individual backups are only reported.
    fn rotate(&self) -> io::Result<()> {
        let stamp = chrono::Utc::now().format("%Y%m%dT%H%M%S%.3fZ");
        let backup = self.file_path.with_extension(format!("{stamp}.json"));
        if self.file_path.exists() {
            fs::rename(&self.file_path, backup)?;
        }
        self.prune_backups()
    }

    fn prune_backups(&self) -> io::Result<()> {
        let Some(dir) = self.file_path.parent() else {
            return Ok(());
        };
        let mut backups = backups_of(dir, &self.file_path)?;

        // Timestamps sort lexicographically; newest first.
        backups.sort_unstable_by(|a, b| b.cmp(a));
        for old in backups.iter().skip(MAX_BACKUP_FILES) {
            if let Err(e) = fs::remove_file(old) {
                eprintln!("recipe-explorer: failed to remove old trace file {}: {e}", old.display());
            }
        }
        Ok(())
    }
}

/// Rotated siblings of `live` in `dir`.
fn backups_of(dir: &Path, live: &Path) -> io::Result<Vec<PathBuf>> {
    let Some(stem) = live.file_stem().and_then(|s| s.to_str()) else {
        return Ok(Vec::new());
    };
    let prefix = format!("{stem}.");

    Ok(fs::read_dir(dir)?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path != live)
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with(&prefix) && name.ends_with(".json"))
        })
        .collect())
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let writer = FileWriter::new(path.clone());

        writer.write_line("{\"a\":1}").unwrap();
        writer.write_line("{\"b\":2}").unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "{\"a\":1}\n{\"b\":2}\n");
    }

    #[test]
    fn prunes_all_but_newest_backups() {
        let dir = tempfile::tempdir().unwrap();
        let live = dir.path().join("trace.json");
        for stamp in ["20260101T000000", "20260102T000000", "20260103T000000", "20260104T000000", "20260105T000000"] {
            fs::write(dir.path().join(format!("trace.{stamp}.json")), "").unwrap();
        }
        fs::write(dir.path().join("other.json"), "").unwrap();
        fs::write(&live, "").unwrap();

        FileWriter::new(live.clone()).prune_backups().unwrap();

        let mut left = backups_of(dir.path(), &live).unwrap();
        left.sort();
        let names: Vec<String> = left
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            vec!["trace.20260103T000000.json", "trace.20260104T000000.json", "trace.20260105T000000.json"]
        );
        assert!(dir.path().join("other.json").exists());
        assert!(live.exists());
    }
}
