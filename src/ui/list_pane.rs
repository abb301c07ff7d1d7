use crate::app::AppState;
use crate::domain::{checkbox_glyph, EmptyState, ListSnapshot, TaskRow, UiMode};
use crate::ui::styles::{
    border_style, default_style, done_style, empty_title_style, hint_style, selected_style,
    title_style,
};
use chrono::Local;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the task list pane
pub fn render_list_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let snapshot = app.snapshot();

    let items: Vec<ListItem> = if let Some(empty) = snapshot.empty_state {
        empty_state_items(empty)
    } else {
        snapshot
            .rows
            .iter()
            .enumerate()
            .map(|(idx, row)| {
                let line = create_task_line(row, app.use_emoji);
                let style = if idx == app.selected_index && app.ui_mode == UiMode::Normal {
                    selected_style()
                } else {
                    default_style()
                };
                ListItem::new(line).style(style)
            })
            .collect()
    };

    let title = pane_title(&snapshot);

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(title, title_style())),
    );

    f.render_widget(list, area);
}

/// Title like " Tick (Fri Aug 08) — Pending (2) "
fn pane_title(snapshot: &ListSnapshot) -> String {
    let date = Local::now().format("%a %b %d");
    format!(
        " Tick ({}) — {} ({}) ",
        date,
        snapshot.filter.name(),
        snapshot.rows.len()
    )
}

/// Create a single line for a task row
/// Format: [x] buy milk
fn create_task_line(row: &TaskRow, use_emoji: bool) -> Line<'static> {
    let glyph = checkbox_glyph(row.completed, use_emoji);
    let text_style = if row.completed {
        done_style()
    } else {
        default_style()
    };

    Line::from(vec![
        Span::raw(format!("{} ", glyph)),
        Span::styled(row.text.clone(), text_style),
    ])
}

/// Render the filter-keyed empty state as list rows
fn empty_state_items(empty: EmptyState) -> Vec<ListItem<'static>> {
    vec![
        ListItem::new(Line::raw("")),
        ListItem::new(Line::from(Span::styled(
            format!("  {}", empty.title),
            empty_title_style(),
        ))),
        ListItem::new(Line::from(Span::styled(
            format!("  {}", empty.message),
            hint_style(),
        ))),
    ]
}
