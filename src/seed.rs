//! Bundled tasks shown when no mirror exists yet.

use crate::error::Result;
use crate::task::Task;

const SEED_JSON: &str = include_str!("../data/seed.json");

pub fn seed_tasks() -> Result<Vec<Task>> {
    Ok(serde_json::from_str(SEED_JSON)?)
}
