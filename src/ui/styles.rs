use ratatui::style::{Color, Modifier, Style};

/// Default text style
pub fn default_style() -> Style {
    Style::default().fg(Color::White)
}

/// Selected row highlight style
pub fn selected_style() -> Style {
    Style::default()
        .bg(Color::DarkGray)
        .add_modifier(Modifier::BOLD)
}

/// Text style for a row at the given opacity (0..=1).
///
/// Terminals have no alpha channel, so opacity becomes a grey level.
pub fn fade_style(opacity: f64) -> Style {
    Style::default().fg(fade_color(opacity))
}

/// Grey level drawn at zero opacity; stays readable on dark backgrounds
pub const FADE_MIN_LEVEL: f64 = 60.0;

/// Grey level for an opacity
pub fn fade_color(opacity: f64) -> Color {
    let level = (FADE_MIN_LEVEL + opacity.clamp(0.0, 1.0) * (255.0 - FADE_MIN_LEVEL)).round() as u8;
    Color::Rgb(level, level, level)
}

/// Completed task style, layered on top of the fade
pub fn completed_style(opacity: f64) -> Style {
    fade_style(opacity).add_modifier(Modifier::CROSSED_OUT)
}

/// Remaining-time bar style
pub fn bar_style(progress: f64) -> Style {
    let color = if progress > 0.66 {
        Color::Green
    } else if progress > 0.33 {
        Color::Yellow
    } else {
        Color::Red
    };
    Style::default().fg(color)
}

/// Title style for panes
pub fn title_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Border style
pub fn border_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Active bucket tab
pub fn tab_highlight_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Input line text
pub fn input_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Keybinding hint style
pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}
