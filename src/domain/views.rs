use super::enums::TimeBucket;
use super::task::Task;
use crate::decay::task_progress;
use chrono::{DateTime, Duration, Utc};

/// Lowest opacity a fading row reaches, so its text stays legible
pub const OPACITY_FLOOR: f64 = 0.05;

/// What the presentation layer needs for one visible task
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRow {
    pub id: String,
    pub text: String,
    pub completed: bool,
    /// Remaining fraction of the time budget
    pub progress: f64,
}

impl DisplayRow {
    pub fn opacity(&self) -> f64 {
        opacity(self.progress)
    }
}

/// Visual decay policy: linear from the floor at 0 to fully opaque at 1
pub fn opacity(progress: f64) -> f64 {
    OPACITY_FLOOR + (1.0 - OPACITY_FLOOR) * progress.clamp(0.0, 1.0)
}

/// Non-abandoned tasks in `bucket`, in insertion order
pub fn visible_tasks(tasks: &[Task], bucket: TimeBucket) -> Vec<&Task> {
    tasks.iter().filter(|t| t.is_visible_in(bucket)).collect()
}

/// Build display rows for `bucket` as of `now`.
///
/// A visible task without a creation timestamp does not decay and is shown
/// at full strength.
pub fn display_rows(tasks: &[Task], bucket: TimeBucket, now: DateTime<Utc>) -> Vec<DisplayRow> {
    visible_tasks(tasks, bucket)
        .into_iter()
        .map(|task| DisplayRow {
            id: task.id.clone(),
            text: task.text.clone(),
            completed: task.completed,
            progress: task_progress(task, now).unwrap_or(1.0),
        })
        .collect()
}

/// Time left before a task expires, if it decays at all
pub fn time_remaining(task: &Task, now: DateTime<Utc>) -> Option<Duration> {
    let created_at = task.created_at?;
    let limit = task.time_limit_minutes.filter(|m| *m > 0)?;
    let deadline = created_at.checked_add_signed(Duration::try_minutes(limit)?)?;
    Some(std::cmp::max(Duration::zero(), deadline - now))
}

/// Count of visible tasks per bucket, in bucket order
pub fn bucket_counts(tasks: &[Task]) -> Vec<(TimeBucket, usize)> {
    TimeBucket::all()
        .iter()
        .map(|b| (*b, tasks.iter().filter(|t| t.is_visible_in(*b)).count()))
        .collect()
}

/// Choose a glyph for how much of the budget is left
pub fn decay_glyph(progress: f64, use_emoji: bool) -> &'static str {
    if use_emoji {
        if progress > 0.66 {
            "🌿"
        } else if progress > 0.33 {
            "🍂"
        } else {
            "🥀"
        }
    } else if progress > 0.66 {
        "*"
    } else if progress > 0.33 {
        "+"
    } else {
        "."
    }
}

/// Format a duration as "Xd Yh", "Xh Ym", "Xm" or "Xs"
pub fn format_remaining(duration: Duration) -> String {
    let total_secs = duration.num_seconds().max(0);
    let days = total_secs / 86_400;
    let hours = (total_secs % 86_400) / 3600;
    let minutes = (total_secs % 3600) / 60;

    if days > 0 {
        format!("{}d {}h", days, hours)
    } else if hours > 0 && minutes > 0 {
        format!("{}h {}m", hours, minutes)
    } else if hours > 0 {
        format!("{}h", hours)
    } else if minutes > 0 {
        format!("{}m", minutes)
    } else {
        format!("{}s", total_secs)
    }
}
