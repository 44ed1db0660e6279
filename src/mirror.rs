//! Persistence port for the board.
//!
//! The store writes its whole collection through a [`Mirror`] after every
//! mutation and reads it back once at startup. The mirror is a copy; the
//! in-memory collection stays authoritative.

use std::cell::{Cell, RefCell};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;
use crate::task::Task;

pub trait Mirror {
    /// Returns `Ok(None)` when nothing has been mirrored yet.
    fn load(&self) -> Result<Option<Vec<Task>>>;

    /// Overwrites the mirror with the full collection.
    fn save(&self, tasks: &[Task]) -> Result<()>;
}

/// Reads a JSON document, mapping a missing file to `None`.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    match fs::read_to_string(path) {
        Ok(data) if data.trim().is_empty() => Ok(None),
        Ok(data) => Ok(Some(serde_json::from_str(&data)?)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err.into()),
    }
}

/// Writes pretty JSON via a sibling temp file and a rename.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let content = serde_json::to_string_pretty(value)?;
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);
    fs::write(&tmp, content)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

/// JSON array of tasks in a single file.
#[derive(Debug, Clone)]
pub struct JsonFileMirror {
    path: PathBuf,
}

impl JsonFileMirror {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Mirror for JsonFileMirror {
    fn load(&self) -> Result<Option<Vec<Task>>> {
        read_json(&self.path)
    }

    fn save(&self, tasks: &[Task]) -> Result<()> {
        write_json(&self.path, tasks)
    }
}

/// Mirror kept in memory as serialized JSON, as a file would hold it.
#[derive(Debug, Default)]
pub struct MemoryMirror {
    blob: RefCell<Option<String>>,
    writes: Cell<usize>,
    fail_writes: Cell<bool>,
}

impl MemoryMirror {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an already serialized blob, which may be garbage.
    pub fn with_blob(blob: impl Into<String>) -> Self {
        let mirror = Self::default();
        *mirror.blob.borrow_mut() = Some(blob.into());
        mirror
    }

    pub fn blob(&self) -> Option<String> {
        self.blob.borrow().clone()
    }

    /// Number of successful saves.
    pub fn writes(&self) -> usize {
        self.writes.get()
    }

    /// Makes every following save fail, like a full disk.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }
}

impl Mirror for MemoryMirror {
    fn load(&self) -> Result<Option<Vec<Task>>> {
        match self.blob.borrow().as_deref() {
            None => Ok(None),
            Some(blob) if blob.trim().is_empty() => Ok(None),
            Some(blob) => Ok(Some(serde_json::from_str(blob)?)),
        }
    }

    fn save(&self, tasks: &[Task]) -> Result<()> {
        if self.fail_writes.get() {
            return Err(io::Error::new(io::ErrorKind::Other, "mirror is full").into());
        }
        *self.blob.borrow_mut() = Some(serde_json::to_string(tasks)?);
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskStatus;

    fn sample() -> Vec<Task> {
        vec![
            Task {
                id: "1".into(),
                title: "A".into(),
                description: String::new(),
                status: TaskStatus::Todo,
            },
            Task {
                id: "2".into(),
                title: "B".into(),
                description: "second".into(),
                status: TaskStatus::Done,
            },
        ]
    }

    #[test]
    fn test_file_mirror_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let mirror = JsonFileMirror::new(dir.path().join("tasks.json"));
        assert!(mirror.load().unwrap().is_none());
    }

    #[test]
    fn test_file_mirror_round_trip_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let mirror = JsonFileMirror::new(dir.path().join("nested").join("tasks.json"));
        mirror.save(&sample()).unwrap();
        assert_eq!(mirror.load().unwrap(), Some(sample()));
        assert!(!dir.path().join("nested").join("tasks.json.tmp").exists());
    }

    #[test]
    fn test_file_mirror_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        JsonFileMirror::new(&path).save(&sample()[..1]).unwrap();
        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(
            raw,
            serde_json::json!([{"id": "1", "title": "A", "description": "", "status": "todo"}])
        );
    }

    #[test]
    fn test_file_mirror_corrupt_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        fs::write(&path, "{ not an array").unwrap();
        assert!(JsonFileMirror::new(&path).load().is_err());
    }

    #[test]
    fn test_memory_mirror_counts_writes_and_fails_on_demand() {
        let mirror = MemoryMirror::new();
        mirror.save(&sample()).unwrap();
        assert_eq!(mirror.writes(), 1);
        mirror.set_fail_writes(true);
        assert!(mirror.save(&[]).is_err());
        assert_eq!(mirror.writes(), 1);
        assert_eq!(mirror.load().unwrap(), Some(sample()));
    }
}
