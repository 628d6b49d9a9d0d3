/// Errors raised by the decay engine.
///
/// Neither variant is user-visible: `InvalidArgument` marks a caller that
/// skipped bucket validation, and `MalformedTask` is turned into a skip by
/// the sweep.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecayError {
    /// Time limit was zero or negative.
    #[error("time limit must be positive, got {time_limit_minutes} minutes")]
    InvalidArgument {
        /// The rejected limit.
        time_limit_minutes: i64,
    },

    /// Task is missing the fields decay needs.
    #[error("task {id} cannot decay: {reason}")]
    MalformedTask {
        /// ID of the offending task.
        id: String,
        /// Which field was missing or invalid.
        reason: &'static str,
    },
}
