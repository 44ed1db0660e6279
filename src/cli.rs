//! Command-line surface.

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::app::{App, TaskEdit};
use crate::error::Result;
use crate::kanban_board::Reorder;
use crate::mirror::Mirror;
use crate::task::{Task, TaskStatus};

const BAR_WIDTH: usize = 30;

#[derive(Debug, Parser)]
#[command(name = "taskcraft")]
#[command(version)]
#[command(about = "Kanban task board for the terminal")]
pub struct Cli {
    /// Directory holding tasks.json and activity.json
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
    /// Config file (defaults to the platform config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Open the interactive board (default)
    Board,
    /// List tasks by column
    List {
        /// Only this column (todo, inprogress, needreview, done)
        #[arg(short, long)]
        status: Option<TaskStatus>,
    },
    /// Add a task
    Add {
        title: String,
        #[arg(short, long, default_value = "")]
        description: String,
        #[arg(short, long, default_value = "todo")]
        status: TaskStatus,
    },
    /// Change a task's title, description or status
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        status: Option<TaskStatus>,
    },
    /// Delete a task
    Delete { id: String },
    /// Move a task to a column, optionally at a position within it
    Move {
        id: String,
        status: TaskStatus,
        /// Position within the column; defaults to the end
        #[arg(short, long)]
        index: Option<usize>,
    },
    /// Find tasks by title or description
    Search { query: String },
    /// Show counts per column
    Stats,
    /// Show recent activity
    Log {
        #[arg(short = 'n', long, default_value_t = 10)]
        limit: usize,
    },
    /// Replace every task with the bundled sample board
    Reset,
}

fn write_task(out: &mut impl Write, task: &Task) -> Result<()> {
    writeln!(out, "  {}  {}", task.id, task.title)?;
    if !task.description.is_empty() {
        writeln!(out, "      {}", task.description)?;
    }
    Ok(())
}

/// Runs every subcommand except `board`, which needs the terminal.
pub fn execute<M: Mirror>(command: Commands, app: &mut App<M>, out: &mut impl Write) -> Result<()> {
    match command {
        Commands::Board => {}
        Commands::List { status } => {
            let columns = match status {
                Some(status) => vec![status],
                None => TaskStatus::ALL.to_vec(),
            };
            for status in columns {
                let tasks = app.board().list_by_status(status);
                writeln!(out, "{} ({})", status.label(), tasks.len())?;
                for task in tasks {
                    write_task(out, task)?;
                }
            }
        }
        Commands::Add {
            title,
            description,
            status,
        } => {
            let id = app.add_task(&title, &description, status)?;
            writeln!(out, "Added {id}")?;
        }
        Commands::Edit {
            id,
            title,
            description,
            status,
        } => {
            app.edit_task(
                &id,
                TaskEdit {
                    title,
                    description,
                    status,
                },
            )?;
            writeln!(out, "Updated {id}")?;
        }
        Commands::Delete { id } => {
            let task = app.delete_task(&id)?;
            writeln!(out, "Deleted {} ({})", task.id, task.title)?;
        }
        Commands::Move { id, status, index } => {
            match app.move_task(&id, status, index.unwrap_or(usize::MAX))? {
                Reorder::Unchanged => writeln!(out, "{id} is already there")?,
                Reorder::Moved { to, .. } => writeln!(out, "Moved {id} to {}", to.label())?,
            }
        }
        Commands::Search { query } => {
            let found = app.board().search(&query);
            if found.is_empty() {
                writeln!(out, "No tasks match \"{query}\"")?;
            }
            for task in found {
                write_task(out, task)?;
            }
        }
        Commands::Stats => {
            let stats = app.stats();
            writeln!(out, "Total: {}", stats.total)?;
            let max = stats.per_status.iter().copied().max().unwrap_or(0).max(1);
            for (label, count) in stats.bars() {
                let width = count as usize * BAR_WIDTH / max;
                writeln!(out, "{label:<12} {} {count}", "█".repeat(width))?;
            }
            writeln!(out, "Completed: {:.0}%", stats.completion_ratio() * 100.0)?;
        }
        Commands::Log { limit } => {
            for entry in app.activity().recent(limit) {
                writeln!(
                    out,
                    "{}  {}",
                    entry.timestamp.format("%Y-%m-%d %H:%M:%S"),
                    entry.message
                )?;
            }
        }
        Commands::Reset => {
            app.reset();
            writeln!(out, "Board reset to {} sample tasks", app.board().len())?;
        }
    }
    Ok(())
}
