//! Plain-text daily log sheet.
//!
//! One line per duty status, `cell_width` columns per hour. Owned hours are
//! filled with `#`; transition segments are drawn with `/` (or `\` for a
//! descending interval) over the part of the cell they cover. Like the
//! printed form, a marker over a filled hour is hidden by the fill.

use crate::config::Config;
use crate::core::timeline::{DaySheet, Direction, HOURS_PER_DAY, Segment, StatusRow};
use crate::utils::formatting::{bold, fit_width, format_hours, pad_left, pad_right};
use crate::utils::table::{Column, Table};
use crate::utils::time::format_position;
use crate::utils::display_annotation;

const LABEL_WIDTH: usize = 12;
const FILLED: char = '#';
const EMPTY: char = '.';

#[derive(Debug, Clone, Copy)]
pub struct TextOptions {
    pub cell_width: usize,
    pub show_annotations: bool,
    pub show_summary: bool,
}

impl From<&Config> for TextOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            cell_width: cfg.cell_width,
            show_annotations: cfg.show_annotations,
            show_summary: cfg.show_summary,
        }
    }
}

fn marker(direction: Direction) -> char {
    match direction {
        Direction::Ascending => '/',
        Direction::Descending => '\\',
    }
}

/// Column range `[from, to)` of a segment inside a cell of `width` columns.
fn segment_span(seg: &Segment, width: usize) -> (usize, usize) {
    let w = width as f64;
    let from = (seg.overlap.offset_fraction * w).floor() as usize;
    let to = ((seg.overlap.offset_fraction + seg.overlap.width_fraction) * w).ceil() as usize;
    (from.min(width), to.clamp(from.min(width), width))
}

fn render_cell(row: &StatusRow, hour: usize, width: usize) -> String {
    if row.active_hours[hour] {
        return FILLED.to_string().repeat(width);
    }

    let mut cell = vec![EMPTY; width];
    for seg in row.segments_in(hour) {
        let (from, to) = segment_span(seg, width);
        let m = marker(seg.overlap.direction);
        for c in &mut cell[from..to] {
            *c = m;
        }
    }
    cell.into_iter().collect()
}

fn render_scale(width: usize) -> String {
    let mut out = pad_right("Hour", LABEL_WIDTH);
    for h in 0..HOURS_PER_DAY {
        out.push('|');
        out.push_str(&pad_right(&fit_width(&h.to_string(), width), width));
    }
    out.push('|');
    out
}

fn render_row(row: &StatusRow, width: usize) -> String {
    let label = format!("{}. {}", row.status.row(), row.status.label());
    let mut out = pad_right(&fit_width(&label, LABEL_WIDTH), LABEL_WIDTH);
    for h in 0..HOURS_PER_DAY {
        out.push('|');
        out.push_str(&render_cell(row, h, width));
    }
    out.push('|');
    out
}

/// Annotation lines for segments wide enough to carry their text.
fn render_annotations(sheet: &DaySheet) -> Vec<String> {
    let mut lines = Vec::new();
    for row in &sheet.rows {
        for seg in row.segments.iter().filter(|s| s.overlap.show_annotation) {
            let interval = &row.transitions[seg.interval];
            let Some(text) = interval.annotation.as_deref() else {
                continue;
            };
            let mut line = format!(
                "  {} {}-{}  {}",
                pad_right(row.status.label(), 8),
                format_position(interval.start_hour),
                format_position(interval.end_hour),
                display_annotation(text)
            );
            if let Some(loc) = &interval.location {
                line.push_str(&format!(" @ {loc}"));
            }
            lines.push(line);
        }
    }
    lines
}

pub fn render_summary(sheet: &DaySheet) -> String {
    let mut table = Table::new(vec![
        Column::new("Driving Hours", 14),
        Column::new("On-Duty Hours", 14),
        Column::new("Rest Hours", 10),
    ]);
    table.add_row(vec![
        pad_left(&format_hours(sheet.summary.driving_hours), 8),
        pad_left(&format_hours(sheet.summary.on_duty_hours), 8),
        pad_left(&format_hours(sheet.summary.rest_hours), 8),
    ]);
    table.render()
}

pub fn render_day(sheet: &DaySheet, opts: TextOptions) -> String {
    let width = opts.cell_width.max(1);
    let mut out = String::new();

    out.push_str(&bold(&format!("Day {}", sheet.day)));
    out.push('\n');
    out.push_str(&render_scale(width));
    out.push('\n');
    for row in &sheet.rows {
        out.push_str(&render_row(row, width));
        out.push('\n');
    }

    if opts.show_annotations {
        let notes = render_annotations(sheet);
        if !notes.is_empty() {
            out.push_str("Remarks:\n");
            for n in notes {
                out.push_str(&n);
                out.push('\n');
            }
        }
    }

    if opts.show_summary {
        out.push('\n');
        out.push_str(&render_summary(sheet));
    }

    out
}
