use chrono::{DateTime, Local, Utc};
use std::time::{SystemTime, UNIX_EPOCH};

pub fn current_timestamp() -> i64 {
    Utc::now().timestamp()
}

/// Milliseconds since the Unix epoch, the unit used for `createdAt` fields
pub fn current_timestamp_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Fractional seconds since the Unix epoch
pub fn current_timestamp_secs_f64() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or_default()
}

/// Seconds elapsed since `timestamp`, rendered with one decimal place
pub fn elapsed_since(timestamp: u64, now: f64) -> String {
    format!("{:.1}", now - timestamp as f64)
}

/// Render an on-chain timestamp (seconds) for display, `—` when unset
pub fn format_chain_timestamp(timestamp: u64) -> String {
    if timestamp == 0 {
        return "—".to_string();
    }

    match i64::try_from(timestamp).ok().and_then(|ts| DateTime::<Utc>::from_timestamp(ts, 0)) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => "—".to_string(),
    }
}

/// Wall-clock time of day for activity feed entries
pub fn local_clock_time() -> String {
    Local::now().format("%H:%M:%S").to_string()
}
