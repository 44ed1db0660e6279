//! Crate-wide error type.

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// File reads and writes
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// No task with the given id
    #[error("Task not found: {0}")]
    NotFound(String),

    /// `add` with an id the board already holds
    #[error("Duplicate task id: {0}")]
    DuplicateId(String),

    #[error("Invalid task: {0}")]
    InvalidTask(String),

    #[error("Invalid status: {0} (expected todo, inprogress, needreview or done)")]
    InvalidStatus(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound(id.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::not_found("42");
        assert_eq!(err.to_string(), "Task not found: 42");

        let err = Error::DuplicateId("7".into());
        assert_eq!(err.to_string(), "Duplicate task id: 7");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(err.to_string().starts_with("JSON error"));
    }
}
