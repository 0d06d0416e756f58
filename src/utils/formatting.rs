//! Formatting utilities used for CLI and export outputs.

use unicode_width::UnicodeWidthStr;

/// Annotations longer than this are shortened for display.
pub const ANNOTATION_MAX_CHARS: usize = 15;
/// Characters kept from a shortened annotation, before the ellipsis.
pub const ANNOTATION_KEEP_CHARS: usize = 12;
pub const ELLIPSIS: &str = "...";

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Hour total with one decimal and an `h` suffix: `7.5` → `"7.5h"`.
///
/// Ties round away from zero (`10.25` → `"10.3h"`); `{:.1}` alone would
/// round them to even.
pub fn format_hours(hours: f64) -> String {
    format!("{:.1}h", (hours * 10.0).round() / 10.0)
}

/// Shorten an annotation so it fits inside a single hour cell.
///
/// Lengths are counted in `char`s, so multi-byte text is never split.
pub fn display_annotation(text: &str) -> String {
    if text.chars().count() > ANNOTATION_MAX_CHARS {
        let head: String = text.chars().take(ANNOTATION_KEEP_CHARS).collect();
        format!("{head}{ELLIPSIS}")
    } else {
        text.to_string()
    }
}

/// Pad to `width` terminal columns (wide glyphs count double).
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}

pub fn pad_left(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - w), s)
    }
}

/// Cut to at most `width` terminal columns.
pub fn fit_width(s: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let cw = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + cw > width {
            break;
        }
        used += cw;
        out.push(c);
    }
    out
}
