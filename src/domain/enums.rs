use serde::{Deserialize, Serialize};

/// Time-limit bucket a task is created in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeBucket {
    OneMinute,
    FifteenMinutes,
    OneHour,
    OneDay,
}

impl Default for TimeBucket {
    fn default() -> Self {
        TimeBucket::OneHour
    }
}

impl TimeBucket {
    /// Budget in minutes
    pub fn minutes(&self) -> u32 {
        match self {
            TimeBucket::OneMinute => 1,
            TimeBucket::FifteenMinutes => 15,
            TimeBucket::OneHour => 60,
            TimeBucket::OneDay => 1440,
        }
    }

    /// Display label for tabs and listings
    pub fn label(&self) -> &'static str {
        match self {
            TimeBucket::OneMinute => "1 min",
            TimeBucket::FifteenMinutes => "15 min",
            TimeBucket::OneHour => "1 hour",
            TimeBucket::OneDay => "1 day",
        }
    }

    /// Exact lookup by minutes
    pub fn try_from_minutes(minutes: u32) -> Option<Self> {
        Self::all().iter().copied().find(|b| b.minutes() == minutes)
    }

    /// Lookup by minutes, falling back to the default bucket
    pub fn from_minutes(minutes: u32) -> Self {
        Self::try_from_minutes(minutes).unwrap_or_default()
    }

    /// Lookup by label (case-insensitive) or by a bare minute count,
    /// falling back to the default bucket
    pub fn from_label(label: &str) -> Self {
        let wanted = label.trim();
        if let Some(bucket) = Self::all()
            .iter()
            .copied()
            .find(|b| b.label().eq_ignore_ascii_case(wanted))
        {
            return bucket;
        }
        wanted
            .parse::<u32>()
            .map(Self::from_minutes)
            .unwrap_or_default()
    }

    /// All buckets, shortest first
    pub fn all() -> &'static [TimeBucket] {
        &[
            TimeBucket::OneMinute,
            TimeBucket::FifteenMinutes,
            TimeBucket::OneHour,
            TimeBucket::OneDay,
        ]
    }

    /// Position in `all()`
    pub fn index(&self) -> usize {
        Self::all().iter().position(|b| b == self).unwrap_or(0)
    }

    /// Next bucket, wrapping around
    pub fn next(&self) -> Self {
        let all = Self::all();
        all[(self.index() + 1) % all.len()]
    }

    /// Previous bucket, wrapping around
    pub fn prev(&self) -> Self {
        let all = Self::all();
        all[(self.index() + all.len() - 1) % all.len()]
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    AddingTask,
}
