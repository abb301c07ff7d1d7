use crate::app::AppState;
use crate::domain::Filter;
use crate::ui::styles::{filter_active_style, filter_inactive_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the filter tab bar: All | Pending | Completed
pub fn render_filter_bar(f: &mut Frame, app: &AppState, area: Rect) {
    let mut spans = vec![Span::raw(" ")];

    for (idx, filter) in Filter::all().iter().enumerate() {
        let label = format!(" [{}] {} ", idx + 1, filter.name());
        let style = if *filter == app.filter {
            filter_active_style()
        } else {
            filter_inactive_style()
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }

    let paragraph = Paragraph::new(Line::from(spans));
    f.render_widget(paragraph, area);
}
