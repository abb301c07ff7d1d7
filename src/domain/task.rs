use chrono::{DateTime, Local};

/// One user-entered item with text, completion flag, identifier and
/// creation time
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    /// Unique ID, monotonically increasing within the stored list
    pub id: u64,
    /// Task text (non-empty after trimming)
    pub text: String,
    /// Whether the task has been completed
    pub completed: bool,
    /// When the task was created (informational only)
    pub created_at: DateTime<Local>,
}

impl Task {
    pub fn new(id: u64, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
            created_at: Local::now(),
        }
    }

    /// Flip the completed flag
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

/// Monotonic id generator, injected into the controller.
///
/// Seeded past the highest persisted id on load so ids stay unique across
/// sessions even when several tasks are created within one clock tick.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Seed the generator from an existing list
    pub fn seeded_from(tasks: &[Task]) -> Self {
        let max_id = tasks.iter().map(|t| t.id).max().unwrap_or(0);
        Self { next: max_id + 1 }
    }

    /// Hand out the next fresh id
    pub fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
