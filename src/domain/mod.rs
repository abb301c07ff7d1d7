pub mod enums;
pub mod task;
pub mod views;

pub use enums::{Filter, ParseFilterError, UiMode};
pub use task::{IdGenerator, Task};
pub use views::{
    build_snapshot, checkbox_glyph, empty_state, filtered_view, sanitize_text, summarize,
    EmptyState, ListSnapshot, Summary, TaskRow,
};
