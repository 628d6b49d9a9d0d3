use super::error::DecayError;
use crate::domain::Task;
use chrono::{DateTime, SubsecRound, Utc};

/// Fraction of a time budget still remaining, in `[0, 1]`.
///
/// Both instants are truncated to whole seconds first so successive calls
/// within the same second agree. A `now` earlier than `created_at` (clock
/// skew) yields exactly 1.
pub fn progress(
    created_at: DateTime<Utc>,
    time_limit_minutes: i64,
    now: DateTime<Utc>,
) -> Result<f64, DecayError> {
    if time_limit_minutes <= 0 {
        return Err(DecayError::InvalidArgument { time_limit_minutes });
    }

    let elapsed_secs = now
        .trunc_subsecs(0)
        .signed_duration_since(created_at.trunc_subsecs(0))
        .num_seconds();
    let budget_secs = time_limit_minutes.saturating_mul(60);

    if elapsed_secs <= 0 {
        return Ok(1.0);
    }
    if elapsed_secs >= budget_secs {
        return Ok(0.0);
    }

    let fraction = 1.0 - elapsed_secs as f64 / budget_secs as f64;
    Ok(fraction.clamp(0.0, 1.0))
}

/// Progress of a task, or `MalformedTask` when it lacks a timestamp or limit.
pub fn task_progress(task: &Task, now: DateTime<Utc>) -> Result<f64, DecayError> {
    let created_at = task.created_at.ok_or_else(|| DecayError::MalformedTask {
        id: task.id.clone(),
        reason: "missing creation timestamp",
    })?;
    let limit = task
        .time_limit_minutes
        .ok_or_else(|| DecayError::MalformedTask {
            id: task.id.clone(),
            reason: "missing time limit",
        })?;

    progress(created_at, limit, now).map_err(|_| DecayError::MalformedTask {
        id: task.id.clone(),
        reason: "non-positive time limit",
    })
}
