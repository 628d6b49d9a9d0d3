use crate::app::AppState;
use crate::domain::{bucket_counts, TimeBucket};
use crate::ui::styles::{border_style, default_style, tab_highlight_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Tabs},
    Frame,
};

/// Render the bucket tabs with live task counts
pub fn render_tabs(f: &mut Frame, app: &AppState, area: Rect) {
    let snapshot = app.store.snapshot();
    let titles: Vec<Line> = bucket_counts(&snapshot)
        .into_iter()
        .map(|(bucket, count)| Line::from(tab_label(bucket, count)))
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(Span::styled(" Time left ", title_style())),
        )
        .style(default_style())
        .highlight_style(tab_highlight_style())
        .select(app.selected_bucket.index());

    f.render_widget(tabs, area);
}

fn tab_label(bucket: TimeBucket, count: usize) -> String {
    format!("{} ({})", bucket.label(), count)
}
