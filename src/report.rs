//! Report assembly: filtering, ordering, file headers, and the public
//! [`reporter`] entry point.

use serde::{Deserialize, Serialize};

use crate::file::FileRecord;
use crate::message::{Message, Severity};
use crate::render;
use crate::row::{self, Row};
use crate::stats::Statistics;
use crate::style;

/// Fallback label for files without a recorded path.
pub const DEFAULT_NAME: &str = "<stdin>";

/// Per-call configuration. Immutable for the duration of a call; all
/// fields default to off/unset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReporterOptions {
    /// Emit ANSI color codes. Detecting terminal capability is the
    /// caller's job; the formatter never inspects the environment.
    pub color: bool,
    /// Include note, url, cause, and trace sections.
    pub verbose: bool,
    /// Omit headers for files without surviving messages.
    pub quiet: bool,
    /// Implies `quiet`, and additionally drops non-fatal messages from
    /// both display and the summary counts.
    pub silent: bool,
    /// Label for files without a recorded path, instead of `<stdin>`.
    pub default_name: Option<String>,
    /// Maximum ancestor-trace depth shown per message in verbose mode.
    /// Unbounded when unset.
    pub trace_limit: Option<usize>,
    /// Characters of source shown around each message's position. Needs
    /// file contents to be present on the record.
    pub context: Option<usize>,
}

/// Input to [`reporter`]: a single file or an ordered collection.
///
/// A single file is "one-file mode": its header name is suppressed when
/// nothing distinguishes it from an anonymous input (no recorded origin
/// path and no `default_name`).
#[derive(Debug, Clone, Copy)]
pub enum ReportInput<'a> {
    One(&'a FileRecord),
    Many(&'a [FileRecord]),
}

impl<'a> From<&'a FileRecord> for ReportInput<'a> {
    fn from(file: &'a FileRecord) -> Self {
        ReportInput::One(file)
    }
}

impl<'a> From<&'a [FileRecord]> for ReportInput<'a> {
    fn from(files: &'a [FileRecord]) -> Self {
        ReportInput::Many(files)
    }
}

impl<'a> From<&'a Vec<FileRecord>> for ReportInput<'a> {
    fn from(files: &'a Vec<FileRecord>) -> Self {
        ReportInput::Many(files)
    }
}

impl<'a, const N: usize> From<&'a [FileRecord; N]> for ReportInput<'a> {
    fn from(files: &'a [FileRecord; N]) -> Self {
        ReportInput::Many(files)
    }
}

/// Format a report for `files`.
///
/// Pure and synchronous: identical inputs produce identical output, the
/// caller's message ordering is never mutated, and diagnostic severity is
/// rendered, never raised. An empty collection yields an empty string with
/// no trailing newline.
pub fn reporter<'a>(files: impl Into<ReportInput<'a>>, options: &ReporterOptions) -> String {
    let (files, one) = match files.into() {
        ReportInput::One(file) => (std::slice::from_ref(file), true),
        ReportInput::Many(files) => (files, false),
    };

    // Deterministic multi-file output: order by current path, keeping the
    // input order for ties and path-less files first.
    let mut ordered: Vec<&FileRecord> = files.iter().collect();
    ordered.sort_by(|a, b| a.path.cmp(&b.path));

    let mut rows: Vec<Row> = Vec::new();
    let mut totals = Statistics::default();

    for file in ordered {
        let messages = applicable(file, options);
        let stats = Statistics::tally(messages.iter().copied());

        if !contributes(file, &messages, options) {
            continue;
        }

        if matches!(rows.last(), Some(last) if !matches!(last, Row::Header(_))) {
            rows.push(Row::Separator);
        }

        let header = header_line(file, &stats, one, options);
        if !header.is_empty() {
            rows.push(Row::Header(header));
        }

        for message in &messages {
            if let Some(window) = options.context
                && let Some(context) = context_line(file, message, window)
            {
                rows.push(Row::Text(context));
            }
            rows.extend(row::message_rows(message, options));
        }

        totals = totals.merge(stats);
    }

    let mut output = render::serialize(&rows);

    if let Some(summary) = render::summary_line(&totals, options.color) {
        if !output.is_empty() {
            output.push('\n');
        }
        output.push('\n');
        output.push_str(&summary);
    }

    output
}

/// The file's messages as they will be displayed: filtered to fatal-only
/// under `silent`, stably sorted by start position. Operates on a copy;
/// the record's own ordering is untouched.
fn applicable<'a>(file: &'a FileRecord, options: &ReporterOptions) -> Vec<&'a Message> {
    let mut messages: Vec<&Message> = if options.silent {
        file.messages
            .iter()
            .filter(|message| message.severity == Severity::Error)
            .collect()
    } else {
        file.messages.iter().collect()
    };

    messages.sort_by(|a, b| a.compare_position(b));
    messages
}

/// Whether the file appears in the report at all. Under quiet/silent a
/// file earns its place with surviving messages; a stored file still
/// reports "written" under quiet, but silent drops even that.
fn contributes(file: &FileRecord, messages: &[&Message], options: &ReporterOptions) -> bool {
    if !messages.is_empty() {
        return true;
    }
    if options.quiet || options.silent {
        return file.stored && !options.silent;
    }
    true
}

/// One header string per file. May be empty, in which case the file's
/// messages appear without a header.
fn header_line(
    file: &FileRecord,
    stats: &Statistics,
    one: bool,
    options: &ReporterOptions,
) -> String {
    let suppressed = one && options.default_name.is_none() && file.origin.is_none();

    let mut line = if suppressed {
        String::new()
    } else {
        let name = file
            .origin
            .as_deref()
            .or(options.default_name.as_deref())
            .unwrap_or(DEFAULT_NAME);
        let mut left = style::file_label(name, stats, options.color);
        if file.moved()
            && let Some(path) = &file.path
        {
            left.push_str(" > ");
            left.push_str(path);
        }
        left
    };

    if stats.total() == 0 {
        if !line.is_empty() {
            line.push_str(": ");
        }
        if file.stored {
            line.push_str(&style::written_label(options.color));
        } else {
            line.push_str("no issues found");
        }
    }

    line
}

/// Source snippet around the message's position, rendered as
/// `"...snippet..."`. Multi-line spans join the first and last line with
/// an ellipsis.
fn context_line(file: &FileRecord, message: &Message, window: usize) -> Option<String> {
    let contents = file.contents.as_deref()?;
    let span = message.position?;

    let lines: Vec<&str> = contents.split('\n').collect();
    let line = *lines.get(span.start.line.checked_sub(1)?)?;
    let end = span.end.unwrap_or(span.start);

    let from = span.start.column.saturating_sub(1).saturating_sub(window);
    let snippet = if end.line > span.start.line {
        let last = lines.get(end.line - 1).copied().unwrap_or("");
        format!(
            "{}...{}",
            slice_chars(line, from, char_count(line)),
            slice_chars(last, 0, end.column + window)
        )
    } else {
        slice_chars(line, from, end.column + window)
    };

    Some(format!("\"...{snippet}...\""))
}

fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// Character-based slice, clamped to the text's length.
fn slice_chars(text: &str, from: usize, to: usize) -> String {
    text.chars()
        .skip(from)
        .take(to.saturating_sub(from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Span;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_header_with_issues_is_bare_name() {
        let file = FileRecord::new("a.js").with_message(Message::warning("w"));
        let stats = Statistics::tally(&file.messages);
        assert_eq!(
            header_line(&file, &stats, false, &ReporterOptions::default()),
            "a.js"
        );
    }

    #[test]
    fn test_header_clean_file() {
        let file = FileRecord::new("b.js");
        let stats = Statistics::default();
        assert_eq!(
            header_line(&file, &stats, false, &ReporterOptions::default()),
            "b.js: no issues found"
        );
    }

    #[test]
    fn test_header_stored_file_says_written() {
        let file = FileRecord::new("b.js").written();
        let stats = Statistics::default();
        assert_eq!(
            header_line(&file, &stats, false, &ReporterOptions::default()),
            "b.js: written"
        );
    }

    #[test]
    fn test_header_moved_file() {
        let file = FileRecord::new("old.js").renamed_to("new.js").written();
        let stats = Statistics::default();
        assert_eq!(
            header_line(&file, &stats, false, &ReporterOptions::default()),
            "old.js > new.js: written"
        );
    }

    #[test]
    fn test_header_anonymous_uses_default_name() {
        let file = FileRecord::anonymous();
        let stats = Statistics::default();
        assert_eq!(
            header_line(&file, &stats, false, &ReporterOptions::default()),
            "<stdin>: no issues found"
        );

        let named = ReporterOptions {
            default_name: Some("input".to_string()),
            ..ReporterOptions::default()
        };
        assert_eq!(
            header_line(&file, &stats, false, &named),
            "input: no issues found"
        );
    }

    #[test]
    fn test_header_suppressed_in_one_file_mode() {
        let file = FileRecord::anonymous();
        let stats = Statistics::default();
        assert_eq!(
            header_line(&file, &stats, true, &ReporterOptions::default()),
            "no issues found"
        );
    }

    #[test]
    fn test_applicable_sorts_without_mutating() {
        let file = FileRecord::new("a.js")
            .with_message(Message::warning("late").at(Span::point(5, 1)))
            .with_message(Message::warning("early").at(Span::point(1, 2)))
            .with_message(Message::warning("anywhere"));

        let sorted = applicable(&file, &ReporterOptions::default());
        let reasons: Vec<&str> = sorted.iter().map(|m| m.reason.as_str()).collect();
        assert_eq!(reasons, vec!["anywhere", "early", "late"]);

        // Caller order untouched.
        assert_eq!(file.messages[0].reason, "late");
    }

    #[test]
    fn test_applicable_silent_keeps_fatal_only() {
        let file = FileRecord::new("a.js")
            .with_message(Message::warning("w"))
            .with_message(Message::error("e"))
            .with_message(Message::info("i"));

        let options = ReporterOptions {
            silent: true,
            ..ReporterOptions::default()
        };
        let kept = applicable(&file, &options);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].reason, "e");
    }

    #[test]
    fn test_applicable_stable_for_equal_positions() {
        let file = FileRecord::new("a.js")
            .with_message(Message::warning("first").at(Span::point(1, 1)))
            .with_message(Message::warning("second").at(Span::point(1, 1)));

        let sorted = applicable(&file, &ReporterOptions::default());
        let reasons: Vec<&str> = sorted.iter().map(|m| m.reason.as_str()).collect();
        assert_eq!(reasons, vec!["first", "second"]);
    }

    #[test]
    fn test_context_line_single_line() {
        let file = FileRecord::new("a.js").with_contents("alpha beta gamma");
        let message = Message::error("e").at(Span::range(1, 7, 1, 11));
        assert_eq!(
            context_line(&file, &message, 2).unwrap(),
            "\"...a beta ga...\""
        );
    }

    #[test]
    fn test_context_line_multi_line() {
        let file = FileRecord::new("a.js").with_contents("first line\nsecond line");
        let message = Message::error("e").at(Span::range(1, 7, 2, 6));
        assert_eq!(
            context_line(&file, &message, 0).unwrap(),
            "\"...line...second...\""
        );
    }

    #[test]
    fn test_context_line_needs_contents_and_position() {
        let no_contents = FileRecord::new("a.js");
        let message = Message::error("e").at(Span::point(1, 1));
        assert_eq!(context_line(&no_contents, &message, 2), None);

        let with_contents = FileRecord::new("a.js").with_contents("text");
        assert_eq!(context_line(&with_contents, &Message::error("e"), 2), None);
    }
}
