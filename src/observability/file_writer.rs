//! Append-only trace file with size-based rotation.
//!
//! When the live file grows past the size limit it is shifted into a numbered
//! backup chain before the next line is written:
//!
//! ```text
//! bookstore-otlp.json    → bookstore-otlp.json.1
//! bookstore-otlp.json.1  → bookstore-otlp.json.2
//! bookstore-otlp.json.2  → bookstore-otlp.json.3
//! bookstore-otlp.json.3  → (removed)
//! ```

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Rotation limits for a [`FileWriter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation {
    /// Size in bytes past which the live file is rotated.
    pub max_bytes: u64,
    /// Number of numbered backups kept.
    pub backups: usize,
}

impl Default for Rotation {
    /// 10 MB per file, three backups.
    fn default() -> Self {
        Self {
            max_bytes: 10 * 1024 * 1024,
            backups: 3,
        }
    }
}

/// Line-oriented writer over a rotating file.
///
/// The handle is opened lazily on the first write and guarded by a `Mutex`,
/// since span exporters may be driven from any thread.
pub struct FileWriter {
    path: PathBuf,
    rotation: Rotation,
    handle: Mutex<Option<File>>,
}

impl FileWriter {
    /// Creates a writer for `path` with the default [`Rotation`].
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self::with_rotation(path, Rotation::default())
    }

    /// Creates a writer for `path` with explicit rotation limits.
    #[must_use]
    pub const fn with_rotation(path: PathBuf, rotation: Rotation) -> Self {
        Self {
            path,
            rotation,
            handle: Mutex::new(None),
        }
    }

    /// Appends `line` plus a newline, rotating first if the file is full.
    ///
    /// # Errors
    ///
    /// Returns an error if rotating, opening or writing the file fails, or if
    /// the lock was poisoned by a panicking writer.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut handle = self
            .handle
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("trace file lock poisoned: {e}")))?;

        if self.is_full() {
            *handle = None;
            self.rotate()?;
        }

        let file = match handle.as_mut() {
            Some(file) => file,
            None => handle.insert(
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&self.path)?,
            ),
        };

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn is_full(&self) -> bool {
        fs::metadata(&self.path).is_ok_and(|m| m.len() > self.rotation.max_bytes)
    }

    /// Shifts the backup chain up by one and moves the live file to `.1`.
    fn rotate(&self) -> io::Result<()> {
        if self.rotation.backups == 0 {
            return fs::remove_file(&self.path);
        }

        let oldest = backup_path(&self.path, self.rotation.backups);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }

        for index in (1..self.rotation.backups).rev() {
            let from = backup_path(&self.path, index);
            if from.exists() {
                fs::rename(&from, backup_path(&self.path, index + 1))?;
            }
        }

        fs::rename(&self.path, backup_path(&self.path, 1))
    }
}

/// `<path>.<index>`, e.g. `bookstore-otlp.json.2`.
fn backup_path(path: &Path, index: usize) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(format!(".{index}"));
    PathBuf::from(name)
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("path", &self.path)
            .field("rotation", &self.rotation)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small(path: PathBuf, backups: usize) -> FileWriter {
        FileWriter::with_rotation(
            path,
            Rotation {
                max_bytes: 8,
                backups,
            },
        )
    }

    #[test]
    fn appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let writer = FileWriter::new(path.clone());

        writer.write_line("{\"a\":1}").unwrap();
        writer.write_line("{\"b\":2}").unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "{\"a\":1}\n{\"b\":2}\n");
    }

    #[test]
    fn rotates_into_numbered_backups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let writer = small(path.clone(), 2);

        for line in ["first-line", "second-line", "third-line", "fourth-line"] {
            writer.write_line(line).unwrap();
        }

        assert_eq!(fs::read_to_string(&path).unwrap(), "fourth-line\n");
        assert_eq!(
            fs::read_to_string(backup_path(&path, 1)).unwrap(),
            "third-line\n"
        );
        assert_eq!(
            fs::read_to_string(backup_path(&path, 2)).unwrap(),
            "second-line\n"
        );
        assert!(!backup_path(&path, 3).exists());
    }

    #[test]
    fn zero_backups_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let writer = small(path.clone(), 0);

        writer.write_line("first-line").unwrap();
        writer.write_line("second-line").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second-line\n");
        assert!(!backup_path(&path, 1).exists());
    }
}
