pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod styles;
pub mod tabs;

use crate::app::AppState;
use input_form::render_input_form;
use keybindings::render_keybindings;
use layout::create_layout;
use list_pane::render_list_pane;
use ratatui::Frame;
use tabs::render_tabs;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let layout = create_layout(f.size());

    render_tabs(f, app, layout.tabs_area);
    render_list_pane(f, app, layout.list_area);
    render_input_form(f, app, layout.input_area);
    render_keybindings(f, layout.keybindings_area, app.ui_mode);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Task, TimeBucket};
    use crate::store::TaskStore;
    use chrono::Utc;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Duration;

    #[test]
    fn test_render_shows_visible_tasks_only() {
        let now = Utc::now();
        let mut hidden = Task::new("Abandoned one".to_string(), TimeBucket::OneHour, now);
        hidden.abandoned = true;
        let tasks = vec![
            Task::new("Visible one".to_string(), TimeBucket::OneHour, now),
            hidden,
            Task::new("Other bucket".to_string(), TimeBucket::OneDay, now),
        ];
        let app = AppState::new(TaskStore::new(tasks), TimeBucket::OneHour, Duration::from_secs(5));

        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal.draw(|f| render(f, &app)).unwrap();

        let buffer = terminal.backend().buffer();
        let screen: String = buffer.content.iter().map(|c| c.symbol()).collect();
        assert!(screen.contains("Visible one"));
        assert!(!screen.contains("Abandoned one"));
        assert!(!screen.contains("Other bucket"));
        assert!(screen.contains("1 hour (1)"));
    }
}
