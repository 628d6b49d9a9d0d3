use crate::domain::UiMode;
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, area: Rect, mode: UiMode) {
    let hints = match mode {
        UiMode::Normal => Line::from(vec![
            Span::raw(" ↑/↓ select   "),
            Span::raw("Enter/Space done   "),
            Span::raw("←/→ bucket   "),
            Span::raw("1-4 jump   "),
            Span::raw("a add   "),
            Span::raw("q quit"),
        ]),
        UiMode::AddingTask => Line::from(vec![
            Span::raw(" Enter add   "),
            Span::raw("Esc cancel"),
        ]),
    };

    let paragraph = Paragraph::new(hints).style(hint_style());
    f.render_widget(paragraph, area);
}
