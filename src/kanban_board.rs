//! The task store behind the board.
//!
//! `KanbanBoard` owns the ordered task collection. Column contents are never
//! stored separately: a column is the collection filtered by status, so the
//! global order is the within-column order.

use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::mirror::Mirror;
use crate::seed::seed_tasks;
use crate::task::{Task, TaskStatus};

/// Where the collection came from at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    Mirror,
    Seed,
}

/// Result of a drag-and-drop move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reorder {
    /// Dropped where it already was; nothing written.
    Unchanged,
    Moved { from: TaskStatus, to: TaskStatus },
}

#[derive(Debug)]
pub struct KanbanBoard<M: Mirror> {
    tasks: Vec<Task>,
    mirror: M,
}

impl<M: Mirror> KanbanBoard<M> {
    /// Empty board that writes through to `mirror`. Nothing is read.
    pub fn new(mirror: M) -> Self {
        Self {
            tasks: Vec::new(),
            mirror,
        }
    }

    /// Reads the mirror, falling back to the seed when it is absent, empty
    /// or unreadable. Never fails.
    pub fn load(mirror: M) -> Self {
        let mut board = Self::new(mirror);
        board.reload();
        board
    }

    /// Replaces the in-memory collection from the mirror (or the seed).
    pub fn reload(&mut self) -> LoadSource {
        match self.mirror.load() {
            Ok(Some(tasks)) if !tasks.is_empty() => match check_collection(&tasks) {
                Ok(()) => {
                    info!(count = tasks.len(), "loaded tasks from mirror");
                    self.tasks = tasks;
                    return LoadSource::Mirror;
                }
                Err(err) => warn!(error = %err, "mirror holds invalid tasks, using seed"),
            },
            Ok(_) => debug!("mirror empty, using seed"),
            Err(err) => warn!(error = %err, "mirror unreadable, using seed"),
        }
        self.reseed();
        LoadSource::Seed
    }

    /// Discards the collection and starts over from the seed.
    pub fn reseed(&mut self) {
        self.tasks = match seed_tasks() {
            Ok(tasks) => tasks,
            Err(err) => {
                warn!(error = %err, "bundled seed unreadable, starting empty");
                Vec::new()
            }
        };
        info!(count = self.tasks.len(), "seeded board");
        self.persist();
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn mirror(&self) -> &M {
        &self.mirror
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn position(&self, id: &str) -> Result<usize> {
        self.tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| Error::not_found(id))
    }

    /// Appends a new task at the end of the collection.
    pub fn add(&mut self, task: Task) -> Result<()> {
        task.validate()?;
        if self.get(&task.id).is_some() {
            return Err(Error::DuplicateId(task.id));
        }
        debug!(id = %task.id, status = %task.status, "add task");
        self.tasks.push(task);
        self.persist();
        Ok(())
    }

    /// Replaces the task with the same id, keeping its position.
    pub fn update(&mut self, task: Task) -> Result<()> {
        task.validate()?;
        let pos = self.position(&task.id)?;
        debug!(id = %task.id, status = %task.status, "update task");
        self.tasks[pos] = task;
        self.persist();
        Ok(())
    }

    /// Removes and returns the task with `id`.
    pub fn delete(&mut self, id: &str) -> Result<Task> {
        let pos = self.position(id)?;
        let removed = self.tasks.remove(pos);
        debug!(id, "delete task");
        self.persist();
        Ok(removed)
    }

    /// Moves a task into `status` so that it sits at `index` within that
    /// column.
    ///
    /// Within the same column an index past the end means the last slot. An
    /// empty destination column receives the task at the end of the whole
    /// collection. An index past the end of the column places it right after
    /// the column's last task.
    pub fn reorder(&mut self, id: &str, status: TaskStatus, index: usize) -> Result<Reorder> {
        let pos = self.position(id)?;
        let from = self.tasks[pos].status;
        let source_index = self.tasks[..pos]
            .iter()
            .filter(|t| t.status == from)
            .count();
        let index = if from == status {
            let last = self.tasks.iter().filter(|t| t.status == from).count() - 1;
            index.min(last)
        } else {
            index
        };
        if from == status && source_index == index {
            return Ok(Reorder::Unchanged);
        }

        let mut task = self.tasks.remove(pos);
        task.status = status;

        let column: Vec<usize> = self
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| t.status == status)
            .map(|(i, _)| i)
            .collect();
        let insert_at = match (column.get(index), column.last()) {
            (Some(&at), _) => at,
            (None, Some(&last)) => last + 1,
            (None, None) => self.tasks.len(),
        };

        debug!(id, %from, to = %status, index, insert_at, "reorder task");
        self.tasks.insert(insert_at, task);
        self.persist();
        Ok(Reorder::Moved { from, to: status })
    }

    /// Tasks in one column, in board order.
    pub fn list_by_status(&self, status: TaskStatus) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.status == status).collect()
    }

    /// Tasks whose title or description contains `query`, ignoring case.
    pub fn search(&self, query: &str) -> Vec<&Task> {
        let needle = query.trim().to_lowercase();
        self.tasks.iter().filter(|t| t.matches(&needle)).collect()
    }

    fn persist(&self) {
        if let Err(err) = self.mirror.save(&self.tasks) {
            warn!(error = %err, "failed to mirror tasks; keeping in-memory state");
        }
    }
}

/// Every task valid and no id repeated.
fn check_collection(tasks: &[Task]) -> Result<()> {
    let mut seen = HashSet::with_capacity(tasks.len());
    for task in tasks {
        task.validate()?;
        if !seen.insert(task.id.as_str()) {
            return Err(Error::DuplicateId(task.id.clone()));
        }
    }
    Ok(())
}
