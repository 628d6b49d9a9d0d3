use crate::domain::{DisplayRow, TimeBucket, UiMode};
use crate::persistence::TaskRepository;
use crate::store::TaskStore;
use crate::ticker::Ticker;
use chrono::{DateTime, Utc};
use std::time::{Duration, Instant};

/// Main application state
pub struct AppState {
    pub store: TaskStore,
    pub selected_bucket: TimeBucket,
    pub selected_index: usize,
    pub ui_mode: UiMode,
    /// Text being typed for a new task
    pub input: String,
    pub use_emoji: bool,
    /// Rows shown until the next tick or interaction
    pub rows: Vec<DisplayRow>,
    /// Wall-clock time the rows were computed at
    pub rendered_at: DateTime<Utc>,
    pub ticker: Ticker,
    /// Shared storage re-read on every tick so tasks added by other
    /// processes show up and are not overwritten
    pub source: Option<Box<dyn TaskRepository>>,
}

impl AppState {
    pub fn new(store: TaskStore, selected_bucket: TimeBucket, tick: Duration) -> Self {
        let now = Utc::now();
        let mut app = Self {
            store,
            selected_bucket,
            selected_index: 0,
            ui_mode: UiMode::Normal,
            input: String::new(),
            use_emoji: true,
            rows: Vec::new(),
            rendered_at: now,
            ticker: Ticker::start(tick, Instant::now()),
            source: None,
        };
        app.refresh(now);
        app
    }

    /// Re-read `source` on every tick
    pub fn with_source(mut self, source: Box<dyn TaskRepository>) -> Self {
        self.source = Some(source);
        self
    }

    /// Recompute the visible rows for the selected bucket
    pub fn refresh(&mut self, now: DateTime<Utc>) {
        self.rows = self.store.rows(self.selected_bucket, now);
        self.rendered_at = now;
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        if self.rows.is_empty() {
            self.selected_index = 0;
        } else if self.selected_index >= self.rows.len() {
            self.selected_index = self.rows.len() - 1;
        }
    }

    /// Fire the decay tick if due. Returns true if the display changed.
    pub fn on_frame(&mut self, instant: Instant) -> bool {
        if !self.ticker.poll(instant) {
            return false;
        }
        if let Some(source) = &self.source {
            match source.load() {
                Ok(stored) => {
                    self.store.absorb(stored);
                }
                Err(e) => tracing::warn!(error = %e, "could not reload stored tasks"),
            }
        }
        let now = Utc::now();
        self.store.decay(now);
        self.refresh(now);
        true
    }

    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.rows.len() {
            self.selected_index += 1;
        }
    }

    /// Switch to a bucket and refresh the view
    pub fn select_bucket(&mut self, bucket: TimeBucket) {
        if bucket != self.selected_bucket {
            self.selected_bucket = bucket;
            self.selected_index = 0;
            self.refresh(Utc::now());
        }
    }

    pub fn next_bucket(&mut self) {
        self.select_bucket(self.selected_bucket.next());
    }

    pub fn prev_bucket(&mut self) {
        self.select_bucket(self.selected_bucket.prev());
    }

    /// Toggle completed on the selected row
    pub fn toggle_selected(&mut self) {
        let Some(row) = self.rows.get(self.selected_index) else {
            return;
        };
        let id = row.id.clone();
        if self.store.toggle_complete(&id) {
            self.refresh(Utc::now());
        }
    }

    pub fn start_input(&mut self) {
        self.input.clear();
        self.ui_mode = UiMode::AddingTask;
    }

    pub fn input_add_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn input_backspace(&mut self) {
        self.input.pop();
    }

    pub fn cancel_input(&mut self) {
        self.input.clear();
        self.ui_mode = UiMode::Normal;
    }

    /// Create a task from the input line in the selected bucket
    pub fn submit_input(&mut self) {
        let text = std::mem::take(&mut self.input);
        let now = Utc::now();
        if self.store.add_task(&text, self.selected_bucket, now).is_some() {
            self.refresh(now);
            self.selected_index = self.rows.len().saturating_sub(1);
        }
        self.ui_mode = UiMode::Normal;
    }

    /// Stop the decay ticker; called on every teardown path
    pub fn shutdown(&mut self) {
        self.ticker.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Task;
    use chrono::Duration as ChronoDuration;

    fn create_test_app() -> AppState {
        let now = Utc::now();
        let tasks = vec![
            Task::new("Task 1".to_string(), TimeBucket::OneHour, now),
            Task::new("Other".to_string(), TimeBucket::OneDay, now),
            Task::new("Task 2".to_string(), TimeBucket::OneHour, now),
        ];
        AppState::new(TaskStore::new(tasks), TimeBucket::OneHour, Duration::from_secs(5))
    }

    #[test]
    fn test_app_state_new() {
        let app = create_test_app();
        assert_eq!(app.rows.len(), 2);
        assert_eq!(app.selected_index, 0);
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_move_selection() {
        let mut app = create_test_app();

        app.move_selection_down();
        assert_eq!(app.selected_index, 1);

        // Can't go past the end
        app.move_selection_down();
        assert_eq!(app.selected_index, 1);

        app.move_selection_up();
        assert_eq!(app.selected_index, 0);

        // Can't go below 0
        app.move_selection_up();
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_bucket_switching() {
        let mut app = create_test_app();
        app.move_selection_down();

        app.next_bucket();
        assert_eq!(app.selected_bucket, TimeBucket::OneDay);
        assert_eq!(app.selected_index, 0);
        assert_eq!(app.rows.len(), 1);
        assert_eq!(app.rows[0].text, "Other");

        app.next_bucket();
        assert_eq!(app.selected_bucket, TimeBucket::OneMinute);
        assert!(app.rows.is_empty());

        app.prev_bucket();
        assert_eq!(app.selected_bucket, TimeBucket::OneDay);
    }

    #[test]
    fn test_toggle_selected() {
        let mut app = create_test_app();
        app.move_selection_down();
        app.toggle_selected();

        assert!(!app.rows[0].completed);
        assert!(app.rows[1].completed);
    }

    #[test]
    fn test_submit_input() {
        let mut app = create_test_app();
        app.start_input();
        assert_eq!(app.ui_mode, UiMode::AddingTask);

        for c in "New one".chars() {
            app.input_add_char(c);
        }
        app.input_backspace();
        app.submit_input();

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.rows.len(), 3);
        assert_eq!(app.rows[2].text, "New on");
        assert_eq!(app.selected_index, 2);
        assert!(app.input.is_empty());
    }

    #[test]
    fn test_submit_blank_input_adds_nothing() {
        let mut app = create_test_app();
        app.start_input();
        app.input_add_char(' ');
        app.submit_input();

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.store.len(), 3);
    }

    #[test]
    fn test_cancel_input() {
        let mut app = create_test_app();
        app.start_input();
        app.input_add_char('x');
        app.cancel_input();

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.input.is_empty());
        assert_eq!(app.store.len(), 3);
    }

    #[test]
    fn test_on_frame_hides_expired_tasks() {
        let now = Utc::now();
        let tasks = vec![
            Task::new("Expired".to_string(), TimeBucket::OneMinute, now - ChronoDuration::minutes(2)),
            Task::new("Fresh".to_string(), TimeBucket::OneMinute, now),
        ];
        let mut app = AppState::new(TaskStore::new(tasks), TimeBucket::OneMinute, Duration::from_secs(5));
        assert_eq!(app.rows.len(), 2);

        let start = Instant::now();
        assert!(app.on_frame(start));
        assert_eq!(app.rows.len(), 1);
        assert_eq!(app.rows[0].text, "Fresh");
        assert!(app.store.snapshot()[0].abandoned);

        // Not due again until one cadence later
        assert!(!app.on_frame(start + Duration::from_secs(1)));
    }

    #[test]
    fn test_on_frame_picks_up_tasks_saved_elsewhere() {
        use crate::persistence::{persist_on_publish, JsonFileRepository};

        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("todos-v1.json");
        let mut other = TaskStore::new(Vec::new());
        persist_on_publish(&mut other, JsonFileRepository::new(&path));

        let mut store = TaskStore::new(Vec::new());
        persist_on_publish(&mut store, JsonFileRepository::new(&path));
        let mut app = AppState::new(store, TimeBucket::OneHour, Duration::from_secs(5))
            .with_source(Box::new(JsonFileRepository::new(&path)));

        other.add_task("Added from the shell", TimeBucket::OneHour, Utc::now());
        assert!(app.on_frame(Instant::now()));

        assert_eq!(app.rows.len(), 1);
        assert_eq!(app.rows[0].text, "Added from the shell");
        assert_eq!(JsonFileRepository::new(&path).load().unwrap().len(), 1);
    }

    #[test]
    fn test_shutdown_cancels_ticker() {
        let mut app = create_test_app();
        app.shutdown();
        assert!(app.ticker.is_cancelled());
        assert!(!app.on_frame(Instant::now() + Duration::from_secs(60)));
    }
}
