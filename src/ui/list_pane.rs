use crate::app::AppState;
use crate::domain::{decay_glyph, format_remaining, DisplayRow};
use crate::ui::styles::{
    bar_style, border_style, completed_style, fade_style, hint_style, selected_style, title_style,
};
use chrono::{DateTime, Duration, Utc};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Width of the remaining-time bar in cells
const BAR_WIDTH: usize = 10;

/// Render the task list for the selected bucket
pub fn render_list_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(
            format!(
                " Tasks · {} · {} ",
                app.selected_bucket.label(),
                rendered_label(app.rendered_at)
            ),
            title_style(),
        ));

    if app.rows.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "Nothing here. Tasks vanish when their time runs out.",
            hint_style(),
        )))
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let limit = Duration::minutes(i64::from(app.selected_bucket.minutes()));
    let items: Vec<ListItem> = app
        .rows
        .iter()
        .enumerate()
        .map(|(idx, row)| {
            let line = create_task_line(row, limit, app.use_emoji);
            let item = ListItem::new(line);
            if idx == app.selected_index {
                item.style(selected_style())
            } else {
                item
            }
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}

/// Build one row: glyph, faded text, bar and time left
fn create_task_line(row: &DisplayRow, limit: Duration, use_emoji: bool) -> Line<'static> {
    let opacity = row.opacity();
    let text_style = if row.completed {
        completed_style(opacity)
    } else {
        fade_style(opacity)
    };
    let remaining = remaining_from_progress(row.progress, limit);

    Line::from(vec![
        Span::raw(format!("{} ", decay_glyph(row.progress, use_emoji))),
        Span::styled(progress_bar(row.progress), bar_style(row.progress)),
        Span::styled(format!(" {:>7} ", format_remaining(remaining)), hint_style()),
        Span::styled(row.text.clone(), text_style),
    ])
}

/// Time left implied by a progress fraction of `limit`
fn remaining_from_progress(progress: f64, limit: Duration) -> Duration {
    let secs = (limit.num_seconds() as f64 * progress.clamp(0.0, 1.0)).round() as i64;
    Duration::seconds(secs)
}

/// Fixed-width bar, filled in proportion to the time left
fn progress_bar(progress: f64) -> String {
    let filled = (progress.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

/// Describe when a snapshot was rendered, for the list footer
pub fn rendered_label(rendered_at: DateTime<Utc>) -> String {
    rendered_at
        .with_timezone(&chrono::Local)
        .format("updated %H:%M:%S")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(1.0), "██████████");
        assert_eq!(progress_bar(0.0), "░░░░░░░░░░");
        assert_eq!(progress_bar(0.5), "█████░░░░░");
    }

    #[test]
    fn test_remaining_from_progress() {
        let limit = Duration::minutes(15);
        assert_eq!(remaining_from_progress(0.5, limit), Duration::seconds(450));
        assert_eq!(remaining_from_progress(1.0, limit), limit);
        assert_eq!(remaining_from_progress(0.0, limit), Duration::zero());
    }

    #[test]
    fn test_create_task_line_spans() {
        let row = DisplayRow {
            id: "1".to_string(),
            text: "Stretch".to_string(),
            completed: false,
            progress: 0.5,
        };
        let line = create_task_line(&row, Duration::minutes(60), false);

        assert_eq!(line.spans.len(), 4);
        assert_eq!(line.spans[0].content, "+ ");
        assert_eq!(line.spans[3].content, "Stretch");
        assert!(line.spans[2].content.contains("30m"));
    }
}
