use crate::domain::{build_snapshot, filtered_view, Filter, IdGenerator, ListSnapshot, Task, UiMode};
use crate::notifications;
use crate::ticker;
use anyhow::Result;
use std::path::PathBuf;
use std::time::Instant;

/// Input form state for adding a task
#[derive(Debug, Clone)]
pub struct InputFormState {
    pub text: String,
}

/// Transient status message shown in the summary pane
#[derive(Debug, Clone)]
pub struct FlashState {
    pub message: String,
    pub expires_at: Instant,
}

/// Main application state: the task list controller.
///
/// Owns the task list and the current filter; every mutating operation
/// marks the state dirty and the event loop persists before polling the
/// next event. Rendering reads only the snapshot, never this struct's
/// internals.
pub struct AppState {
    pub tasks: Vec<Task>,
    pub filter: Filter,
    pub selected_index: usize,
    pub ui_mode: UiMode,
    pub input_form: Option<InputFormState>,
    pub use_emoji: bool,
    pub needs_save: bool,
    pub flash: Option<FlashState>,
    ids: IdGenerator,
    store_path: PathBuf,
}

impl AppState {
    /// The id generator is injected so callers control seeding; see
    /// [`IdGenerator::seeded_from`] for loading an existing list.
    pub fn new(
        tasks: Vec<Task>,
        ids: IdGenerator,
        store_path: PathBuf,
        filter: Filter,
        use_emoji: bool,
    ) -> Self {
        Self {
            tasks,
            filter,
            selected_index: 0,
            ui_mode: UiMode::Normal,
            input_form: None,
            use_emoji,
            needs_save: false,
            flash: None,
            ids,
            store_path,
        }
    }

    /// Read-only view-model for the rendering layer
    pub fn snapshot(&self) -> ListSnapshot {
        build_snapshot(&self.tasks, self.filter)
    }

    /// Number of rows in the current filtered view
    pub fn visible_count(&self) -> usize {
        filtered_view(&self.tasks, self.filter).len()
    }

    /// Id of the task under the selection cursor, if any
    pub fn selected_task_id(&self) -> Option<u64> {
        filtered_view(&self.tasks, self.filter)
            .get(self.selected_index)
            .map(|t| t.id)
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Move selection down
    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.visible_count() {
            self.selected_index += 1;
        }
    }

    /// Keep the selection inside the filtered view after a mutation
    fn clamp_selection(&mut self) {
        let count = self.visible_count();
        if count == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= count {
            self.selected_index = count - 1;
        }
    }

    /// Add a task from raw input. Whitespace-only input is silently
    /// rejected - no error, no state change.
    pub fn add_task(&mut self, raw: &str) {
        let text = raw.trim();
        if text.is_empty() {
            return;
        }

        let task = Task::new(self.ids.next_id(), text.to_string());
        // Newest first
        self.tasks.insert(0, task);
        self.selected_index = 0;
        self.needs_save = true;
        self.set_flash(format!("Added \"{}\"", text));
    }

    /// Flip the completed flag on the task with the given id (no-op if absent)
    pub fn toggle_task(&mut self, id: u64) {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return;
        };
        task.toggle();
        let now_completed = task.completed;
        self.needs_save = true;
        self.clamp_selection();

        // Celebrate when the last pending task is ticked off
        if now_completed && self.tasks.iter().all(|t| t.completed) {
            notifications::notify_all_done(self.tasks.len());
        }
    }

    /// Toggle the task under the selection cursor
    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            self.toggle_task(id);
        }
    }

    /// Remove the task with the given id (no-op if absent)
    pub fn delete_task(&mut self, id: u64) {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() != before {
            self.needs_save = true;
            self.clamp_selection();
        }
    }

    /// Delete the task under the selection cursor
    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            self.delete_task(id);
        }
    }

    /// Remove all completed tasks, preserving the order of the remainder
    pub fn clear_completed(&mut self) {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        let removed = before - self.tasks.len();
        if removed > 0 {
            self.needs_save = true;
            self.clamp_selection();
            self.set_flash(format!(
                "Cleared {} completed task{}",
                removed,
                if removed == 1 { "" } else { "s" }
            ));
        }
    }

    /// Switch the session filter (not persisted) and reset the selection
    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
        self.selected_index = 0;
    }

    /// Cycle to the next filter in tab order
    pub fn cycle_filter(&mut self) {
        self.set_filter(self.filter.next());
    }

    /// Start adding a new task (opens input form)
    pub fn start_add_task(&mut self) {
        self.input_form = Some(InputFormState {
            text: String::new(),
        });
        self.ui_mode = UiMode::AddingTask;
    }

    /// Add character to the input form
    pub fn input_form_add_char(&mut self, c: char) {
        if let Some(form) = &mut self.input_form {
            form.text.push(c);
        }
    }

    /// Backspace in the input form
    pub fn input_form_backspace(&mut self) {
        if let Some(form) = &mut self.input_form {
            form.text.pop();
        }
    }

    /// Submit the input form and create the task
    pub fn submit_input_form(&mut self) {
        if let Some(form) = self.input_form.take() {
            self.add_task(&form.text);
            self.ui_mode = UiMode::Normal;
        }
    }

    /// Cancel the input form
    pub fn cancel_input_form(&mut self) {
        self.input_form = None;
        self.ui_mode = UiMode::Normal;
    }

    /// Show a transient status message
    fn set_flash(&mut self, message: String) {
        self.flash = Some(FlashState {
            message,
            expires_at: Instant::now() + ticker::flash_duration(),
        });
    }

    /// Expire the flash message. Ticks never touch task state.
    pub fn tick(&mut self) {
        if let Some(flash) = &self.flash {
            if Instant::now() >= flash.expires_at {
                self.flash = None;
            }
        }
    }

    /// Save the full task list to disk
    pub fn save(&mut self) -> Result<()> {
        crate::persistence::save_tasks(&self.store_path, &self.tasks)?;
        self.needs_save = false;
        Ok(())
    }
}
