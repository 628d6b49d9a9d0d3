use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub tabs_area: Rect,
    pub list_area: Rect,
    pub input_area: Rect,
    pub keybindings_area: Rect,
}

/// Create the main layout
/// - Bucket tabs (3 rows, bordered)
/// - Task list (rest)
/// - Input line (3 rows, bordered)
/// - Keybindings bar (1 row)
pub fn create_layout(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);

    MainLayout {
        tabs_area: chunks[0],
        list_area: chunks[1],
        input_area: chunks[2],
        keybindings_area: chunks[3],
    }
}
