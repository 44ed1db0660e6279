//! Per-column counts for the dashboard.

use crate::task::{Task, TaskStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub total: usize,
    /// Indexed by `TaskStatus::index`.
    pub per_status: [usize; 4],
}

impl Stats {
    pub fn from_tasks<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Self {
        let mut stats = Stats::default();
        for task in tasks {
            stats.total += 1;
            stats.per_status[task.status.index()] += 1;
        }
        stats
    }

    pub fn count(&self, status: TaskStatus) -> usize {
        self.per_status[status.index()]
    }

    /// Share of tasks in `Done`, 0.0 for an empty board.
    pub fn completion_ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.count(TaskStatus::Done) as f64 / self.total as f64
        }
    }

    /// `(label, count)` pairs in column order, ready for a bar chart.
    pub fn bars(&self) -> Vec<(&'static str, u64)> {
        TaskStatus::ALL
            .iter()
            .map(|s| (s.label(), self.count(*s) as u64))
            .collect()
    }
}
