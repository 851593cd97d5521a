//! Sentinel markers for cells whose value cannot be rendered.
//!
//! Unset, malformed, absent, and zero-valued inputs are different failure
//! classes and must stay distinguishable in the table, so each gets its own
//! marker. Formatting functions never return errors; fallible paths resolve
//! through [`Outcome`] and collapse to a marker at the boundary.

/// Marker for a value that was never set (zero timestamp, empty field).
pub const UNKNOWN_VALUE: &str = "<unknown>";

/// Marker for a malformed value or an unavailable dependency.
pub const NA_VALUE: &str = "n/a";

/// Marker for a field absent from the source object.
pub const MISSING_VALUE: &str = "ø";

/// Marker for a numeric zero.
pub const ZERO_VALUE: &str = "0";

/// Result of a fallible render path.
///
/// Kept enumerated internally so unset and malformed inputs stay testable
/// without parsing the output string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Value(String),
    Unset,
    Malformed,
    Unavailable,
}

impl Outcome {
    /// Resolve to the final cell text.
    pub fn render(self) -> String {
        match self {
            Outcome::Value(s) => s,
            Outcome::Unset => UNKNOWN_VALUE.to_string(),
            Outcome::Malformed | Outcome::Unavailable => NA_VALUE.to_string(),
        }
    }
}

/// Substitute the not-applicable marker for an empty string.
pub fn na(s: &str) -> String {
    check(s, NA_VALUE)
}

/// Substitute the missing marker for an empty string.
pub fn missing(s: &str) -> String {
    check(s, MISSING_VALUE)
}

fn check(s: &str, sub: &str) -> String {
    if s.is_empty() {
        sub.to_string()
    } else {
        s.to_string()
    }
}

/// Join entries with commas, or the not-applicable marker when there are none.
pub fn na_strings(ss: &[String]) -> String {
    if ss.is_empty() {
        NA_VALUE.to_string()
    } else {
        ss.join(",")
    }
}
