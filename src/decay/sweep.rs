use super::progress::task_progress;
use crate::domain::Task;
use chrono::{DateTime, Utc};

/// Outcome of one decay tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SweepReport {
    /// Tasks whose progress was computed
    pub evaluated: usize,
    /// IDs newly flagged abandoned on this tick
    pub abandoned: Vec<String>,
    /// IDs skipped because they lack decay fields
    pub skipped: Vec<String>,
}

impl SweepReport {
    pub fn changed(&self) -> bool {
        !self.abandoned.is_empty()
    }
}

/// Re-evaluate every task against `now` and return the next collection.
///
/// Already-abandoned tasks and tasks from before decay existed (no
/// timestamp and no limit) are carried over untouched. Tasks with only one
/// of the two fields, or a non-positive limit, are skipped and reported.
pub fn sweep(tasks: &[Task], now: DateTime<Utc>) -> (Vec<Task>, SweepReport) {
    let mut report = SweepReport::default();

    let next = tasks
        .iter()
        .map(|task| {
            let mut task = task.clone();
            if task.abandoned {
                return task;
            }
            if task.created_at.is_none() && task.time_limit_minutes.is_none() {
                return task;
            }

            match task_progress(&task, now) {
                Ok(progress) => {
                    report.evaluated += 1;
                    if progress <= 0.0 {
                        task.abandoned = true;
                        report.abandoned.push(task.id.clone());
                    }
                }
                Err(err) => {
                    tracing::warn!(error = %err, "skipping task during decay");
                    report.skipped.push(task.id.clone());
                }
            }
            task
        })
        .collect();

    (next, report)
}
