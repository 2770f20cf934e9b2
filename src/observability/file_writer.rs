//! Size-rotating log file.
//!
//! Before each write the current file size is checked. Once it passes the
//! limit the file is renamed to `<name>.1`, older backups shift up by one, and
//! anything beyond the retention count is removed.
//!
//! ```text
//! nodelist.log  →  nodelist.log.1  →  nodelist.log.2  →  nodelist.log.3  →  (deleted)
//! ```

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Maximum file size before rotation (10 MiB).
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files to retain after rotation.
const MAX_BACKUP_FILES: usize = 3;

/// Append-only log file that rotates by size.
///
/// The file is opened lazily on the first write, so constructing a writer for
/// an unwritable location succeeds and only the writes fail.
pub struct RotatingFile {
    file_path: PathBuf,
    file: Option<File>,
    max_bytes: u64,
    max_backups: usize,
}

impl RotatingFile {
    /// Creates a writer with the default limits (10 MiB, 3 backups).
    #[must_use]
    pub const fn new(file_path: PathBuf) -> Self {
        Self::with_limits(file_path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    #[must_use]
    pub const fn with_limits(file_path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            file_path,
            file: None,
            max_bytes,
            max_backups,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Path of the `index`-th backup (1 is the newest).
    #[must_use]
    pub fn backup_path(&self, index: usize) -> PathBuf {
        let mut name = self.file_path.clone().into_os_string();
        name.push(format!(".{index}"));
        PathBuf::from(name)
    }

    fn rotate_if_needed(&mut self) -> io::Result<()> {
        let Ok(metadata) = fs::metadata(&self.file_path) else {
            return Ok(());
        };
        if metadata.len() < self.max_bytes {
            return Ok(());
        }

        self.file = None;

        if self.max_backups == 0 {
            return fs::remove_file(&self.file_path);
        }

        let oldest = self.backup_path(self.max_backups);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for index in (1..self.max_backups).rev() {
            let from = self.backup_path(index);
            if from.exists() {
                fs::rename(&from, self.backup_path(index + 1))?;
            }
        }
        fs::rename(&self.file_path, self.backup_path(1))
    }

    fn file(&mut self) -> io::Result<&mut File> {
        if self.file.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)?;
            self.file = Some(file);
        }

        self.file
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "log file unavailable"))
    }
}

impl Write for RotatingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.rotate_if_needed()?;
        self.file()?.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.file.as_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("file_path", &self.file_path)
            .field("max_bytes", &self.max_bytes)
            .field("max_backups", &self.max_backups)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_without_rotating_below_limit() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = RotatingFile::with_limits(dir.path().join("test.log"), 1024, 2);

        writer.write_all(b"one\n").unwrap();
        writer.write_all(b"two\n").unwrap();
        writer.flush().unwrap();

        assert_eq!(fs::read_to_string(writer.path()).unwrap(), "one\ntwo\n");
        assert!(!writer.backup_path(1).exists());
    }

    #[test]
    fn rotates_and_keeps_bounded_backups() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = RotatingFile::with_limits(dir.path().join("test.log"), 4, 2);

        for line in ["aaaa\n", "bbbb\n", "cccc\n", "dddd\n"] {
            writer.write_all(line.as_bytes()).unwrap();
        }
        writer.flush().unwrap();

        assert_eq!(fs::read_to_string(writer.path()).unwrap(), "dddd\n");
        assert_eq!(fs::read_to_string(writer.backup_path(1)).unwrap(), "cccc\n");
        assert_eq!(fs::read_to_string(writer.backup_path(2)).unwrap(), "bbbb\n");
        assert!(!writer.backup_path(3).exists());
    }

    #[test]
    fn backup_names_append_index() {
        let writer = RotatingFile::new(PathBuf::from("/tmp/nodelist.log"));
        assert_eq!(writer.backup_path(2), PathBuf::from("/tmp/nodelist.log.2"));
    }
}
