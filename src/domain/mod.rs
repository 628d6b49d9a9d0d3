pub mod enums;
pub mod task;
pub mod views;

pub use enums::{TimeBucket, UiMode};
pub use task::{parse_timestamp, Task, TIMESTAMP_FORMAT};
pub use views::{
    bucket_counts, decay_glyph, display_rows, format_remaining, opacity, time_remaining,
    visible_tasks, DisplayRow, OPACITY_FLOOR,
};
