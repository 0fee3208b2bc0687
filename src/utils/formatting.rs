//! Formatting utilities used for report and pager output.

use unicode_width::UnicodeWidthStr;

/// Pad to `width` terminal columns (wide glyphs count double).
pub fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(fill))
}

pub fn pad_left(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{}{}", " ".repeat(fill), s)
}

/// Seconds → whole minutes, rounding half to even (150s → 2, 210s → 4).
pub fn secs2mins(secs: f64) -> i64 {
    (secs / 60.0).round_ties_even() as i64
}
