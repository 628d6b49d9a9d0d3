pub mod error;
pub mod progress;
pub mod sweep;

pub use error::DecayError;
pub use progress::{progress, task_progress};
pub use sweep::{sweep, SweepReport};
