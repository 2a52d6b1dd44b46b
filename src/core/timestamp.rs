use chrono::{DateTime, Utc};

/// Format shared by every timestamp this crate emits.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Current UTC time, e.g. `2024-05-01T12:30:00Z`.
pub fn get_timestamp() -> String {
    format_timestamp(Utc::now())
}

pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}
