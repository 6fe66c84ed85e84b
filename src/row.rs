//! Internal row model and message row construction.
//!
//! A report is built as structured rows first and serialized second:
//! column widths are only known once every row has been visited, so rows
//! cannot stream straight to output (see `render` for the second phase).

use crate::message::{Cause, Message};
use crate::report::ReporterOptions;
use crate::style;

/// One line of the final report, before alignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Row {
    /// File header; a plain string, not subject to column alignment.
    Header(String),
    /// Aligned message cells.
    Message(MessageCells),
    /// Verbatim continuation line: multi-line reason remainder, verbose
    /// blocks, or source context.
    Text(String),
    /// Blank line between a message block and the next header.
    Separator,
}

/// Cells of one aligned message row, in column order. The leading blank
/// cell that indents message rows is implicit in the serializer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MessageCells {
    pub position: String,
    pub label: String,
    pub reason: String,
    pub rule_id: String,
    pub source: String,
}

/// Build the rows for one message: the aligned cell row, then any
/// continuation lines.
pub(crate) fn message_rows(message: &Message, options: &ReporterOptions) -> Vec<Row> {
    let mut rows = Vec::new();

    let position = message
        .position
        .map(|span| span.to_string())
        .unwrap_or_default();
    let (head, rest) = split_first_line(message.display_reason());

    rows.push(Row::Message(MessageCells {
        position,
        label: style::severity_label(message.severity, options.color),
        reason: style::style_code_spans(head, options.color),
        rule_id: message.rule_id.clone().unwrap_or_default(),
        source: message.source.clone().unwrap_or_default(),
    }));

    for line in rest {
        rows.push(Row::Text(line.to_string()));
    }

    if options.verbose {
        push_verbose_blocks(&mut rows, message, options);
    }

    rows
}

/// Labeled continuation blocks shown in verbose mode, in a fixed order:
/// note, url, cause, trace.
fn push_verbose_blocks(rows: &mut Vec<Row>, message: &Message, options: &ReporterOptions) {
    if let Some(note) = &message.note {
        rows.push(Row::Text("[note]:".to_string()));
        for line in note.lines() {
            rows.push(Row::Text(format!("  {line}")));
        }
    }

    if let Some(url) = &message.url {
        rows.push(Row::Text("[url]:".to_string()));
        rows.push(Row::Text(format!("  {url}")));
    }

    if let Some(cause) = &message.cause {
        rows.push(Row::Text("[cause]:".to_string()));
        push_cause(rows, cause, 1, options);
    }

    if !message.ancestors.is_empty() {
        rows.push(Row::Text("[trace]:".to_string()));
        let limit = options.trace_limit.unwrap_or(usize::MAX);
        for node in message.ancestors.iter().take(limit) {
            let line = match node.position {
                Some(point) => format!("  at {} ({}:{})", node.name, point.line, point.column),
                None => format!("  at {}", node.name),
            };
            rows.push(Row::Text(line));
        }
    }
}

fn push_cause(rows: &mut Vec<Row>, cause: &Cause, depth: usize, options: &ReporterOptions) {
    let indent = "  ".repeat(depth);

    match cause {
        Cause::Message(inner) => {
            // The nested message's primary parts on one line, then its own
            // cause one level deeper.
            let (head, rest) = split_first_line(inner.display_reason());
            let label = style::severity_label(inner.severity, options.color);
            let line = match inner.position {
                Some(span) => format!("{indent}{span}  {label}  {head}"),
                None => format!("{indent}{label}  {head}"),
            };
            rows.push(Row::Text(line));
            for extra in rest {
                rows.push(Row::Text(format!("{indent}{extra}")));
            }
            if let Some(next) = &inner.cause {
                push_cause(rows, next, depth + 1, options);
            }
        }
        Cause::ErrorLike { message, stack } => match stack {
            Some(stack) => {
                for line in stack.lines() {
                    rows.push(Row::Text(format!("{indent}{line}")));
                }
            }
            None => rows.push(Row::Text(format!("{indent}{message}"))),
        },
        Cause::Text(text) => {
            for line in text.lines() {
                rows.push(Row::Text(format!("{indent}{line}")));
            }
        }
        Cause::Unknown => rows.push(Row::Text(format!("{indent}<unknown>"))),
    }
}

/// Split at the first line break: the head participates in alignment, the
/// remaining lines become verbatim continuation rows.
fn split_first_line(text: &str) -> (&str, Vec<&str>) {
    let Some(at) = text.find(['\r', '\n']) else {
        return (text, Vec::new());
    };
    (&text[..at], split_lines(strip_break(&text[at..])))
}

/// Split on `\r`, `\n`, or `\r\n`; a trailing break yields no empty line.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;

    while let Some(at) = rest.find(['\r', '\n']) {
        lines.push(&rest[..at]);
        rest = strip_break(&rest[at..]);
    }
    if !rest.is_empty() {
        lines.push(rest);
    }

    lines
}

/// Drop one leading line break, whichever form it takes.
fn strip_break(text: &str) -> &str {
    if let Some(stripped) = text.strip_prefix("\r\n") {
        stripped
    } else {
        text.strip_prefix(['\r', '\n']).unwrap_or(text)
    }
}
