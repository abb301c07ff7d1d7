use crate::app::AppState;
use crate::ui::styles::{border_style, default_style, flash_style, hint_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the summary pane: status line, clear-completed hint, flash message
pub fn render_summary_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let summary = app.snapshot().summary;
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        summary.status_line(app.use_emoji),
        default_style(),
    )));

    // Clear-completed affordance only appears when there is something to clear
    if summary.show_clear_completed() {
        lines.push(Line::from(Span::styled(
            format!(
                "{} completed — press 'c' to clear",
                summary.completed
            ),
            hint_style(),
        )));
    } else {
        lines.push(Line::raw(""));
    }

    if let Some(flash) = &app.flash {
        lines.push(Line::from(Span::styled(
            flash.message.clone(),
            flash_style(),
        )));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(" Summary ", title_style())),
    );

    f.render_widget(paragraph, area);
}
