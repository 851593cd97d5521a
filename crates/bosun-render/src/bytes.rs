//! Byte-count humanization on a 1024 log scale.

use crate::sentinel::ZERO_VALUE;

const BASE: f64 = 1024.0;
const SUFFIXES: [&str; 7] = ["", "K", "M", "G", "T", "P", "E"];
const MIB: i64 = 1024 * 1024;

/// Humanize a byte count into a short fixed-column string.
///
/// Zero is the unset marker, counts under ten stay literal (`"7 B"`), and
/// everything else scales to one of K/M/G/T/P/E with at most one decimal:
/// `1536` → `"1.5K"`, `1073741824` → `"1G"`. The log scale keeps output to
/// 2-6 characters across nine orders of magnitude.
pub fn humanize_bytes(v: i64) -> String {
    if v <= 0 {
        return ZERO_VALUE.to_string();
    }
    humanate(v as u64)
}

fn humanate(s: u64) -> String {
    if s < 10 {
        return format!("{s} B");
    }
    let e = ((s as f64).ln() / BASE.ln()).floor() as usize;
    // Anything past E is outside the supported magnitude range (~2^70).
    debug_assert!(e < SUFFIXES.len(), "byte count {s} exhausts the suffix table");
    let e = e.min(SUFFIXES.len() - 1);

    // Round half-up to one decimal at the scaled magnitude.
    let val = (s as f64 / BASE.powi(e as i32) * 10.0 + 0.5).floor() / 10.0;
    let mut out = if val < 10.0 {
        format!("{val:.1}")
    } else {
        format!("{val:.0}")
    };
    if out.ends_with(".0") {
        out.truncate(out.len() - 2);
    }
    out.push_str(SUFFIXES[e]);
    out
}

/// Render `used/limit(pct%)`; with no limit, just the humanized value.
///
/// Percentages above 100 are surfaced as-is, an over-limit cell is a
/// diagnostic signal rather than an error.
pub fn mem_pct(v: i64, l: i64) -> String {
    if l <= 0 {
        return humanize_bytes(v);
    }
    let pct = v as f64 / l as f64 * 100.0;
    format!("{}/{}({pct:.0}%)", humanize_bytes(v), humanize_bytes(l))
}

/// Bytes as a whole MiB count; zero keeps the zero marker.
pub fn to_mib(v: i64) -> String {
    if v == 0 {
        return ZERO_VALUE.to_string();
    }
    (v / MIB).to_string()
}
