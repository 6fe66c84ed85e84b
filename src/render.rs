//! Second phase of report assembly: column alignment, serialization, and
//! the trailing summary line.
//!
//! Widths are computed over every cell row before any line is rendered;
//! the output cannot stream.

use crate::row::{MessageCells, Row};
use crate::stats::Statistics;
use crate::style;
use crate::width::display_width;

/// Gap between adjacent columns.
const GUTTER: &str = "  ";

/// Error glyph in the summary line.
const ERROR_MARK: &str = "\u{2716}"; // ✖

/// Warning glyph in the summary line.
const WARNING_MARK: &str = "\u{26a0}"; // ⚠

/// Per-column maximum visible widths across all cell rows. The trailing
/// source column never pads, so it carries no width.
#[derive(Debug, Clone, Copy, Default)]
struct ColumnWidths {
    position: usize,
    label: usize,
    reason: usize,
    rule_id: usize,
}

/// Render the ordered rows into the final newline-joined report body.
///
/// Cell rows are padded to the per-column maxima; header and continuation
/// rows pass through verbatim, right-trimmed.
pub(crate) fn serialize(rows: &[Row]) -> String {
    let widths = measure(rows);

    let lines: Vec<String> = rows
        .iter()
        .map(|row| match row {
            Row::Separator => String::new(),
            Row::Header(text) | Row::Text(text) => text.trim_end().to_string(),
            Row::Message(cells) => render_cells(cells, widths),
        })
        .collect();

    lines.join("\n")
}

fn measure(rows: &[Row]) -> ColumnWidths {
    rows.iter().fold(ColumnWidths::default(), |mut w, row| {
        if let Row::Message(cells) = row {
            w.position = w.position.max(display_width(&cells.position));
            w.label = w.label.max(display_width(&cells.label));
            w.reason = w.reason.max(display_width(&cells.reason));
            w.rule_id = w.rule_id.max(display_width(&cells.rule_id));
        }
        w
    })
}

fn render_cells(cells: &MessageCells, widths: ColumnWidths) -> String {
    let line = [
        String::new(),
        pad_left(&cells.position, widths.position),
        pad_right(&cells.label, widths.label),
        pad_right(&cells.reason, widths.reason),
        pad_right(&cells.rule_id, widths.rule_id),
        cells.source.clone(),
    ]
    .join(GUTTER);

    line.trim_end().to_string()
}

fn pad_left(value: &str, minimum: usize) -> String {
    let pad = minimum.saturating_sub(display_width(value));
    format!("{}{value}", " ".repeat(pad))
}

fn pad_right(value: &str, minimum: usize) -> String {
    let pad = minimum.saturating_sub(display_width(value));
    format!("{value}{}", " ".repeat(pad))
}

/// Trailing aggregate line, or `None` when there are no errors and no
/// warnings to summarize (info-only reports get no summary).
pub(crate) fn summary_line(stats: &Statistics, color: bool) -> Option<String> {
    if stats.fatal == 0 && stats.warn == 0 {
        return None;
    }

    let mut segments = Vec::new();

    if stats.fatal > 0 {
        segments.push(format!(
            "{} {} {}",
            style::red(ERROR_MARK, color),
            stats.fatal,
            plural("error", stats.fatal)
        ));
    }

    if stats.warn > 0 {
        segments.push(format!(
            "{} {} {}",
            style::yellow(WARNING_MARK, color),
            stats.warn,
            plural("warning", stats.warn)
        ));
    }

    let joined = segments.join(", ");
    let total = stats.total();

    // Wrap when the total tells the reader something the segments alone
    // do not: both kinds present, or info messages in the count.
    if total != stats.fatal && total != stats.warn {
        Some(format!("{total} messages ({joined})"))
    } else {
        Some(joined)
    }
}

fn plural(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}
