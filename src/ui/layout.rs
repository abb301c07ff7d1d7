use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub keybindings_area: Rect,
    pub filter_area: Rect,
    pub list_area: Rect,
    pub summary_area: Rect,
}

/// Create the main layout
/// - Top bar: keybindings (1 row)
/// - Filter bar (1 row)
/// - Main area: task list
/// - Bottom: summary pane (status line, clear hint, flash)
pub fn create_layout(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Keybindings bar
            Constraint::Length(1), // Filter bar
            Constraint::Min(0),    // Task list
            Constraint::Length(5), // Summary pane
        ])
        .split(area);

    MainLayout {
        keybindings_area: chunks[0],
        filter_area: chunks[1],
        list_area: chunks[2],
        summary_area: chunks[3],
    }
}

/// Create centered modal area (for the add-task form)
pub fn create_modal_area(area: Rect) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Length(8),
            Constraint::Percentage(30),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}
