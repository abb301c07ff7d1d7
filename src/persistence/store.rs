use crate::domain::Task;
use anyhow::Result;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk record for a single task.
///
/// Timestamps are stored as ISO-8601 strings, keyed `createdAt`, matching
/// the serialized shape readers of the store expect.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: u64,
    pub text: String,
    pub completed: bool,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl TaskRecord {
    pub fn from_task(task: &Task) -> Self {
        Self {
            id: task.id,
            text: task.text.clone(),
            completed: task.completed,
            created_at: task.created_at.to_rfc3339(),
        }
    }

    /// Convert back to a domain task. An unparsable timestamp falls back to
    /// the load time; the field is informational only.
    pub fn into_task(self) -> Task {
        let created_at = DateTime::parse_from_rfc3339(&self.created_at)
            .map(|dt| dt.with_timezone(&Local))
            .unwrap_or_else(|_| Local::now());

        Task {
            id: self.id,
            text: self.text,
            completed: self.completed,
            created_at,
        }
    }
}

/// Load the task list from the store.
///
/// Missing file, unreadable content and content that fails to parse as an
/// array of task records all load as the empty list - a corrupt store is
/// treated as "no data", never surfaced as an error.
pub fn load_tasks<P: AsRef<Path>>(path: P) -> Vec<Task> {
    let content = match super::files::read_file(path) {
        Ok(content) => content,
        Err(_) => return Vec::new(),
    };

    if content.is_empty() {
        return Vec::new();
    }

    match serde_json::from_str::<Vec<TaskRecord>>(&content) {
        Ok(records) => records.into_iter().map(TaskRecord::into_task).collect(),
        Err(_) => Vec::new(),
    }
}

/// Save the full task list to the store (atomic write)
pub fn save_tasks<P: AsRef<Path>>(path: P, tasks: &[Task]) -> Result<()> {
    let records: Vec<TaskRecord> = tasks.iter().map(TaskRecord::from_task).collect();
    let json = serde_json::to_string_pretty(&records)?;
    super::files::atomic_write(path, &json)?;
    Ok(())
}
