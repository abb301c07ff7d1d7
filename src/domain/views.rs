use super::enums::Filter;
use super::task::Task;

/// A single renderable row derived from a task
#[derive(Debug, Clone, PartialEq)]
pub struct TaskRow {
    pub id: u64,
    /// Display text, sanitized for the terminal
    pub text: String,
    pub completed: bool,
}

/// Summary counts displayed under the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub pending: usize,
    pub completed: usize,
}

impl Summary {
    /// The clear-completed affordance is only shown when there is
    /// something to clear
    pub fn show_clear_completed(&self) -> bool {
        self.completed > 0
    }

    /// Status line text: "No tasks yet", "All N tasks completed!" or
    /// "X of N tasks remaining"
    pub fn status_line(&self, use_emoji: bool) -> String {
        if self.total == 0 {
            "No tasks yet".to_string()
        } else if self.pending == 0 {
            if use_emoji {
                format!("🎉 All {} task{} completed!", self.total, plural(self.total))
            } else {
                format!("All {} task{} completed!", self.total, plural(self.total))
            }
        } else {
            format!(
                "{} of {} task{} remaining",
                self.pending,
                self.total,
                plural(self.total)
            )
        }
    }
}

/// Message shown when the filtered view is empty, keyed by filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyState {
    pub title: &'static str,
    pub message: &'static str,
}

/// Read-only view-model consumed by the rendering layer
#[derive(Debug, Clone)]
pub struct ListSnapshot {
    pub rows: Vec<TaskRow>,
    pub summary: Summary,
    pub filter: Filter,
    /// Present when the filtered view has no rows
    pub empty_state: Option<EmptyState>,
}

/// Compute the filtered view: the ordered subsequence of tasks passing the
/// filter. Pure function of (tasks, filter).
pub fn filtered_view<'a>(tasks: &'a [Task], filter: Filter) -> Vec<&'a Task> {
    tasks.iter().filter(|t| filter.matches(t.completed)).collect()
}

/// Count totals over the full (unfiltered) list
pub fn summarize(tasks: &[Task]) -> Summary {
    let total = tasks.len();
    let completed = tasks.iter().filter(|t| t.completed).count();
    Summary {
        total,
        pending: total - completed,
        completed,
    }
}

/// Empty-state copy for each filter
pub fn empty_state(filter: Filter) -> EmptyState {
    match filter {
        Filter::All => EmptyState {
            title: "Ready to get started?",
            message: "Add your first task and make today productive.",
        },
        Filter::Pending => EmptyState {
            title: "All caught up!",
            message: "No pending tasks. Nice work.",
        },
        Filter::Completed => EmptyState {
            title: "Keep going!",
            message: "Complete some tasks to see them here.",
        },
    }
}

/// Build the full snapshot for rendering
pub fn build_snapshot(tasks: &[Task], filter: Filter) -> ListSnapshot {
    let rows: Vec<TaskRow> = filtered_view(tasks, filter)
        .into_iter()
        .map(|t| TaskRow {
            id: t.id,
            text: sanitize_text(&t.text),
            completed: t.completed,
        })
        .collect();

    let empty_state = if rows.is_empty() {
        Some(empty_state(filter))
    } else {
        None
    };

    ListSnapshot {
        rows,
        summary: summarize(tasks),
        filter,
        empty_state,
    }
}

/// Replace control characters with spaces so stored text cannot corrupt
/// the terminal display
pub fn sanitize_text(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

/// Choose checkbox glyph for a row
pub fn checkbox_glyph(completed: bool, use_emoji: bool) -> &'static str {
    if use_emoji {
        if completed {
            "☑"
        } else {
            "☐"
        }
    } else {
        // ASCII fallback
        if completed {
            "[x]"
        } else {
            "[ ]"
        }
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: u64, text: &str, completed: bool) -> Task {
        let mut t = Task::new(id, text.to_string());
        t.completed = completed;
        t
    }

    #[test]
    fn test_filtered_view_all_passes_through() {
        let tasks = vec![task(1, "A", false), task(2, "B", true)];
        let view = filtered_view(&tasks, Filter::All);
        assert_eq!(view.len(), 2);
        assert_eq!(view[0].id, 1);
        assert_eq!(view[1].id, 2);
    }

    #[test]
    fn test_filtered_view_pending() {
        let tasks = vec![task(1, "A", false), task(2, "B", true), task(3, "C", false)];
        let view = filtered_view(&tasks, Filter::Pending);
        assert_eq!(view.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn test_filtered_view_completed_preserves_order() {
        let tasks = vec![task(3, "C", true), task(2, "B", false), task(1, "A", true)];
        let view = filtered_view(&tasks, Filter::Completed);
        assert_eq!(view.iter().map(|t| t.id).collect::<Vec<_>>(), vec![3, 1]);
    }

    #[test]
    fn test_summarize() {
        let tasks = vec![task(1, "A", false), task(2, "B", true), task(3, "C", true)];
        let summary = summarize(&tasks);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.pending, 1);
        assert_eq!(summary.completed, 2);
        assert!(summary.show_clear_completed());
    }

    #[test]
    fn test_summary_hides_clear_completed_when_none_done() {
        let summary = summarize(&[task(1, "A", false)]);
        assert!(!summary.show_clear_completed());
    }

    #[test]
    fn test_status_line_wording() {
        assert_eq!(summarize(&[]).status_line(false), "No tasks yet");
        assert_eq!(
            summarize(&[task(1, "A", false)]).status_line(false),
            "1 of 1 task remaining"
        );
        assert_eq!(
            summarize(&[task(1, "A", false), task(2, "B", true)]).status_line(false),
            "1 of 2 tasks remaining"
        );
        assert_eq!(
            summarize(&[task(1, "A", true)]).status_line(false),
            "All 1 task completed!"
        );
        assert_eq!(
            summarize(&[task(1, "A", true)]).status_line(true),
            "🎉 All 1 task completed!"
        );
    }

    #[test]
    fn test_empty_state_keyed_by_filter() {
        assert_eq!(empty_state(Filter::All).title, "Ready to get started?");
        assert_eq!(empty_state(Filter::Pending).title, "All caught up!");
        assert_eq!(empty_state(Filter::Completed).title, "Keep going!");
    }

    #[test]
    fn test_build_snapshot_with_rows() {
        let tasks = vec![task(2, "B", false), task(1, "A", true)];
        let snapshot = build_snapshot(&tasks, Filter::All);
        assert_eq!(snapshot.rows.len(), 2);
        assert!(snapshot.empty_state.is_none());
        assert_eq!(snapshot.summary.total, 2);
        assert_eq!(snapshot.rows[0].id, 2);
    }

    #[test]
    fn test_build_snapshot_empty_view_has_empty_state() {
        let tasks = vec![task(1, "A", false)];
        let snapshot = build_snapshot(&tasks, Filter::Completed);
        assert!(snapshot.rows.is_empty());
        assert_eq!(snapshot.empty_state, Some(empty_state(Filter::Completed)));
        // Summary still counts the full list
        assert_eq!(snapshot.summary.total, 1);
    }

    #[test]
    fn test_sanitize_text() {
        assert_eq!(sanitize_text("buy milk"), "buy milk");
        assert_eq!(sanitize_text("a\tb\nc"), "a b c");
        assert_eq!(sanitize_text("bell\x07"), "bell ");
    }

    #[test]
    fn test_checkbox_glyph() {
        assert_eq!(checkbox_glyph(true, true), "☑");
        assert_eq!(checkbox_glyph(false, true), "☐");
        assert_eq!(checkbox_glyph(true, false), "[x]");
        assert_eq!(checkbox_glyph(false, false), "[ ]");
    }
}
