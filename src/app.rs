//! Composition root: the board, its activity log and the config that
//! located them. Views go through `App` rather than touching the store.

use tracing::info;

use crate::activity::ActivityLog;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::kanban_board::{KanbanBoard, Reorder};
use crate::mirror::{JsonFileMirror, Mirror};
use crate::stats::Stats;
use crate::task::{Task, TaskStatus};

/// Field changes for an edit; `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct TaskEdit {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
}

#[derive(Debug)]
pub struct App<M: Mirror> {
    board: KanbanBoard<M>,
    activity: ActivityLog,
}

impl App<JsonFileMirror> {
    pub fn open(config: &Config) -> Self {
        let mirror = JsonFileMirror::new(config.tasks_path());
        info!(path = %mirror.path().display(), "opening board");
        let board = KanbanBoard::load(mirror);
        let activity = ActivityLog::open(config.activity_path(), config.activity_limit);
        Self::new(board, activity)
    }
}

impl<M: Mirror> App<M> {
    pub fn new(board: KanbanBoard<M>, activity: ActivityLog) -> Self {
        Self { board, activity }
    }

    pub fn board(&self) -> &KanbanBoard<M> {
        &self.board
    }

    pub fn activity(&self) -> &ActivityLog {
        &self.activity
    }

    pub fn stats(&self) -> Stats {
        Stats::from_tasks(self.board.tasks())
    }

    /// Creates a task and returns its id.
    pub fn add_task(
        &mut self,
        title: &str,
        description: &str,
        status: TaskStatus,
    ) -> Result<String> {
        let task = Task::new(title.trim(), description.trim(), status);
        let id = task.id.clone();
        self.board.add(task)?;
        self.activity.record(format!("Added \"{}\"", title.trim()));
        Ok(id)
    }

    pub fn edit_task(&mut self, id: &str, edit: TaskEdit) -> Result<()> {
        let mut task = self
            .board
            .get(id)
            .cloned()
            .ok_or_else(|| Error::not_found(id))?;
        if let Some(title) = edit.title {
            task.title = title.trim().to_string();
        }
        if let Some(description) = edit.description {
            task.description = description.trim().to_string();
        }
        if let Some(status) = edit.status {
            task.status = status;
        }
        let title = task.title.clone();
        self.board.update(task)?;
        self.activity.record(format!("Updated \"{title}\""));
        Ok(())
    }

    pub fn delete_task(&mut self, id: &str) -> Result<Task> {
        let removed = self.board.delete(id)?;
        self.activity.record(format!("Deleted \"{}\"", removed.title));
        Ok(removed)
    }

    pub fn move_task(&mut self, id: &str, status: TaskStatus, index: usize) -> Result<Reorder> {
        let outcome = self.board.reorder(id, status, index)?;
        if let Reorder::Moved { from, to } = outcome {
            let title = self.board.get(id).map(|t| t.title.clone()).unwrap_or_default();
            if from == to {
                self.activity.record(format!("Reordered \"{title}\" in {}", to.label()));
            } else {
                self.activity.record(format!("Moved \"{title}\" to {}", to.label()));
            }
        }
        Ok(outcome)
    }

    /// Throws away every task and reloads the bundled seed.
    pub fn reset(&mut self) {
        self.board.reseed();
        self.activity.record("Board reset");
    }
}
