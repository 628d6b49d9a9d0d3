use super::enums::TimeBucket;
use chrono::{DateTime, NaiveDateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Storage format for creation timestamps (UTC, whole seconds)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single to-do entry with an optional time budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Opaque unique ID
    pub id: String,
    /// User-supplied label
    pub text: String,
    /// Toggled by the user, independent of decay
    #[serde(default)]
    pub completed: bool,
    /// Creation time, truncated to whole seconds. Absent for records from
    /// before decay existed or when the stored value could not be parsed.
    #[serde(
        rename = "timestamp",
        default,
        with = "timestamp_format",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
    /// Time budget in minutes
    #[serde(
        rename = "timeLimit",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub time_limit_minutes: Option<i64>,
    /// Set once by the decay sweep, never cleared
    #[serde(default)]
    pub abandoned: bool,
}

impl Task {
    pub fn new(text: String, bucket: TimeBucket, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text,
            completed: false,
            created_at: Some(now.trunc_subsecs(0)),
            time_limit_minutes: Some(i64::from(bucket.minutes())),
            abandoned: false,
        }
    }

    /// Whether this task takes part in decay evaluation
    pub fn is_decaying(&self) -> bool {
        self.created_at.is_some() && self.time_limit_minutes.is_some() && !self.abandoned
    }

    /// Whether this task shows up under `bucket`
    pub fn is_visible_in(&self, bucket: TimeBucket) -> bool {
        !self.abandoned && self.time_limit_minutes == Some(i64::from(bucket.minutes()))
    }

    /// Bucket this task was created in, if its limit is one of the known ones
    pub fn bucket(&self) -> Option<TimeBucket> {
        self.time_limit_minutes
            .and_then(|m| u32::try_from(m).ok())
            .and_then(TimeBucket::try_from_minutes)
    }
}

/// Serde adapter for `Option<DateTime<Utc>>` stored as `YYYY-MM-DD HH:MM:SS`.
///
/// Unparseable values load as `None` so a single bad record never blocks
/// loading the rest of the collection.
mod timestamp_format {
    use super::TIMESTAMP_FORMAT;
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(ts) => serializer.serialize_str(&ts.format(TIMESTAMP_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(raw.and_then(|s| match super::parse_timestamp(&s) {
            Some(ts) => Some(ts),
            None => {
                tracing::warn!(value = %s, "ignoring unparseable task timestamp");
                None
            }
        }))
    }
}

/// Parse a stored timestamp. Accepts the storage format as well as RFC 3339.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT) {
        return Some(naive.and_utc());
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc).trunc_subsecs(0))
}
