//! Kanban task board: an ordered task store mirrored to a JSON file, with a
//! terminal board and a command-line surface on top.

pub mod activity;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod kanban_board;
pub mod mirror;
pub mod seed;
pub mod stats;
pub mod task;
pub mod ui;

pub use app::App;
pub use error::{Error, Result};
pub use kanban_board::{KanbanBoard, LoadSource, Reorder};
pub use mirror::{JsonFileMirror, MemoryMirror, Mirror};
pub use task::{Task, TaskStatus};
