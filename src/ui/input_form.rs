use crate::app::AppState;
use crate::domain::UiMode;
use crate::ui::styles::{border_style, hint_style, input_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the input line for new tasks
pub fn render_input_form(f: &mut Frame, app: &AppState, area: Rect) {
    let line = if app.ui_mode == UiMode::AddingTask {
        Line::from(vec![
            Span::raw("> "),
            Span::styled(app.input.as_str(), input_style()),
            Span::styled("█", input_style()), // Cursor
        ])
    } else {
        Line::from(Span::styled("Press a to add a new task...", hint_style()))
    };

    let title = format!(" Add to {} ", app.selected_bucket.label());
    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(title, title_style())),
    );

    f.render_widget(paragraph, area);
}
