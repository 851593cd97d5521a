//! Width-exact fitting of cell text into fixed columns.
//!
//! Width here means terminal rendered width, not character count: CJK and
//! other wide glyphs occupy two columns and must be budgeted as such or the
//! table drifts out of alignment.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '\u{2026}';

/// Fit a string to an exact rendered width.
///
/// Equal widths pass through, longer strings truncate, shorter ones are
/// right-padded with spaces. Truncation can land one column short when a
/// wide glyph straddles the cut, so the result is padded back up; the
/// output always occupies exactly `width` columns. Idempotent for a fixed
/// width.
pub fn pad(s: &str, width: usize) -> String {
    let w = s.width();
    if w == width {
        return s.to_string();
    }
    if w > width {
        return fill(truncate(s, width), width);
    }
    fill(s.to_string(), width)
}

fn fill(mut s: String, width: usize) -> String {
    for _ in 0..width.saturating_sub(s.width()) {
        s.push(' ');
    }
    s
}

/// Truncate to the rendered width, ending with a single ellipsis glyph.
///
/// The result never exceeds `width` columns; when the glyph before the cut
/// is wide the result may fall one column short, which still aligns.
pub fn truncate(s: &str, width: usize) -> String {
    if s.width() <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let budget = width - ELLIPSIS.width().unwrap_or(1);
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let cw = c.width().unwrap_or(0);
        if used + cw > budget {
            break;
        }
        used += cw;
        out.push(c);
    }
    out.push(ELLIPSIS);
    out
}
