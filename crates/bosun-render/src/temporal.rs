//! Relative "age" rendering for timestamp columns.

use chrono::{DateTime, TimeDelta, Utc};

use crate::sentinel::Outcome;

/// Age of a structured timestamp; `None` means the field was never set.
pub fn to_age(t: Option<DateTime<Utc>>) -> String {
    match t {
        Some(t) => human_duration(Utc::now().signed_duration_since(t)),
        None => Outcome::Unset.render(),
    }
}

/// Age of an RFC3339-encoded timestamp.
///
/// Empty input is unset, an unparseable one is malformed; the two render
/// distinct markers.
pub fn to_age_human(s: &str) -> String {
    parse_age(s).render()
}

fn parse_age(s: &str) -> Outcome {
    if s.is_empty() {
        return Outcome::Unset;
    }
    match DateTime::parse_from_rfc3339(s) {
        Ok(t) => Outcome::Value(human_duration(
            Utc::now().signed_duration_since(t.with_timezone(&Utc)),
        )),
        Err(_) => Outcome::Malformed,
    }
}

/// Compact human duration, at most the two largest non-zero units.
///
/// Precision degrades with magnitude: `"47s"`, `"5m12s"`, `"1h30m"`,
/// `"3d"`, `"2y12d"`. Hour units begin at exactly one hour. Negative
/// durations clamp to `"0s"`.
pub fn human_duration(d: TimeDelta) -> String {
    let seconds = d.num_seconds();
    if seconds < 0 {
        return "0s".to_string();
    }
    if seconds < 120 {
        return format!("{seconds}s");
    }

    let minutes = seconds / 60;
    if minutes < 10 {
        let s = seconds % 60;
        if s == 0 {
            return format!("{minutes}m");
        }
        return format!("{minutes}m{s}s");
    }
    if minutes < 60 {
        return format!("{minutes}m");
    }

    let hours = seconds / 3600;
    if hours < 8 {
        let m = minutes % 60;
        if m == 0 {
            return format!("{hours}h");
        }
        return format!("{hours}h{m}m");
    }
    if hours < 48 {
        return format!("{hours}h");
    }

    let days = hours / 24;
    if hours < 24 * 8 {
        let h = hours % 24;
        if h == 0 {
            return format!("{days}d");
        }
        return format!("{days}d{h}h");
    }
    if hours < 24 * 365 * 2 {
        return format!("{days}d");
    }

    let years = days / 365;
    if hours < 24 * 365 * 8 {
        let dy = days % 365;
        if dy == 0 {
            return format!("{years}y");
        }
        return format!("{years}y{dy}d");
    }
    format!("{years}y")
}
