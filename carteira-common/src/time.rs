//! Timestamp utilities

use chrono::{DateTime, Utc};

/// Get current UTC timestamp
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Current wall-clock time in milliseconds since the Unix epoch.
///
/// Callers that need a testable clock (e.g. the influencer number
/// derivation) take this value as an explicit parameter instead of
/// reading the clock themselves.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
