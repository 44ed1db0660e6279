//! Newest-first log of board changes, persisted next to the tasks.

use std::path::PathBuf;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::mirror::{read_json, write_json};

pub const DEFAULT_ACTIVITY_LIMIT: usize = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    pub message: String,
    pub timestamp: DateTime<Local>,
}

#[derive(Debug)]
pub struct ActivityLog {
    entries: Vec<Activity>,
    limit: usize,
    path: Option<PathBuf>,
}

impl ActivityLog {
    /// Log that is never written anywhere.
    pub fn in_memory(limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            limit,
            path: None,
        }
    }

    /// Reads the log at `path`; a missing or unreadable file gives an empty log.
    pub fn open(path: impl Into<PathBuf>, limit: usize) -> Self {
        let path = path.into();
        let mut entries: Vec<Activity> = match read_json(&path) {
            Ok(entries) => entries.unwrap_or_default(),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "activity log unreadable, starting empty");
                Vec::new()
            }
        };
        entries.truncate(limit);
        Self {
            entries,
            limit,
            path: Some(path),
        }
    }

    pub fn record(&mut self, message: impl Into<String>) {
        self.entries.insert(
            0,
            Activity {
                id: Uuid::new_v4().to_string(),
                message: message.into(),
                timestamp: Local::now(),
            },
        );
        self.entries.truncate(self.limit);
        self.persist();
    }

    /// Entries, newest first.
    pub fn entries(&self) -> &[Activity] {
        &self.entries
    }

    pub fn recent(&self, n: usize) -> &[Activity] {
        &self.entries[..n.min(self.entries.len())]
    }

    fn persist(&self) {
        let Some(path) = &self.path else { return };
        if let Err(err) = write_json(path, &self.entries) {
            warn!(path = %path.display(), error = %err, "failed to write activity log");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_record_is_newest_first() {
        let mut log = ActivityLog::in_memory(10);
        log.record("first");
        log.record("second");
        let messages: Vec<_> = log.entries().iter().map(|a| a.message.as_str()).collect();
        assert_eq!(messages, vec!["second", "first"]);
    }

    #[test]
    fn test_limit_drops_oldest() {
        let mut log = ActivityLog::in_memory(2);
        log.record("a");
        log.record("b");
        log.record("c");
        let messages: Vec<_> = log.entries().iter().map(|a| a.message.as_str()).collect();
        assert_eq!(messages, vec!["c", "b"]);
        assert_eq!(log.recent(1).len(), 1);
        assert_eq!(log.recent(50).len(), 2);
    }

    #[test]
    fn test_persists_and_reopens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("activity.json");
        let mut log = ActivityLog::open(&path, 10);
        log.record("Added \"A\"");
        let reopened = ActivityLog::open(&path, 10);
        assert_eq!(reopened.entries(), log.entries());
    }

    #[test]
    fn test_corrupt_file_gives_empty_log() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("activity.json");
        fs::write(&path, "garbage").unwrap();
        let log = ActivityLog::open(&path, 10);
        assert!(log.entries().is_empty());
    }
}
