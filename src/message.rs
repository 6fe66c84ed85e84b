//! Diagnostic message data model.
//!
//! Messages are consumed read-only by the reporter; nothing here formats
//! anything. The types double as an ingestion boundary: tools that encode
//! severity as a nullable boolean or attach arbitrarily-shaped cause values
//! map them into [`Severity`] and [`Cause`] once, and rendering never has to
//! shape-sniff afterwards.

use std::{cmp::Ordering, fmt};

use serde::{Deserialize, Serialize};

/// Severity level of a diagnostic message.
///
/// Sources that use a tri-state `fatal` flag map `true` to `Error`, `false`
/// to `Warning`, and absent to `Info`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    #[default]
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// A point in a source file. Lines and columns are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub line: usize,
    pub column: usize,
}

impl Point {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Position of a message: a start point and an optional end point.
///
/// Displays as `line:column`, or `startLine:startCol-endLine:endCol` when a
/// non-trivial end point is present (an end with a zero line or column is
/// treated as absent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: Point,
    #[serde(default)]
    pub end: Option<Point>,
}

impl Span {
    /// A single-point position.
    pub fn point(line: usize, column: usize) -> Self {
        Self {
            start: Point::new(line, column),
            end: None,
        }
    }

    /// A full start-to-end range.
    pub fn range(start_line: usize, start_column: usize, end_line: usize, end_column: usize) -> Self {
        Self {
            start: Point::new(start_line, start_column),
            end: Some(Point::new(end_line, end_column)),
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end {
            Some(end) if end.line > 0 && end.column > 0 => write!(
                f,
                "{}:{}-{}:{}",
                self.start.line, self.start.column, end.line, end.column
            ),
            _ => write!(f, "{}:{}", self.start.line, self.start.column),
        }
    }
}

/// Underlying-cause information attached to a message.
///
/// Resolved once when the message is built, so that the reporter renders all
/// variants uniformly. Causes nest: a `Message` cause may itself carry a
/// cause, and the chain is unwrapped recursively in verbose mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Cause {
    /// A nested diagnostic message.
    Message(Box<Message>),
    /// An error-like value carrying a message and, possibly, a stack trace.
    ErrorLike {
        message: String,
        #[serde(default)]
        stack: Option<String>,
    },
    /// A primitive or plain value, rendered through its string form.
    Text(String),
    /// A value with neither a message nor a stack.
    Unknown,
}

/// One node of a message's ancestor trace, nearest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceNode {
    /// Tag or name of the structural node.
    pub name: String,
    #[serde(default)]
    pub position: Option<Point>,
}

impl TraceNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: None,
        }
    }

    /// A node with a known position.
    pub fn at(name: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            name: name.into(),
            position: Some(Point::new(line, column)),
        }
    }
}

/// A single diagnostic attached to a file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Message {
    /// Human-readable description of the problem.
    pub reason: String,
    /// Multi-line trace from a wrapped lower-level error. Preferred over
    /// `reason` for display when present; the two are never concatenated.
    pub stack: Option<String>,
    pub severity: Severity,
    pub position: Option<Span>,
    /// Identifier of the rule that produced the message.
    pub rule_id: Option<String>,
    /// Namespace of the rule, e.g. the name of the producing tool.
    pub source: Option<String>,
    /// Free-form elaboration, shown in verbose mode only.
    pub note: Option<String>,
    /// Link to documentation, shown in verbose mode only.
    pub url: Option<String>,
    /// Underlying cause, unwrapped recursively in verbose mode.
    pub cause: Option<Cause>,
    /// Structural ancestors, nearest first; rendered in verbose mode.
    pub ancestors: Vec<TraceNode>,
}

impl Message {
    pub fn new(reason: impl Into<String>, severity: Severity) -> Self {
        Self {
            reason: reason.into(),
            severity,
            ..Self::default()
        }
    }

    pub fn error(reason: impl Into<String>) -> Self {
        Self::new(reason, Severity::Error)
    }

    pub fn warning(reason: impl Into<String>) -> Self {
        Self::new(reason, Severity::Warning)
    }

    pub fn info(reason: impl Into<String>) -> Self {
        Self::new(reason, Severity::Info)
    }

    pub fn at(mut self, position: Span) -> Self {
        self.position = Some(position);
        self
    }

    pub fn rule(mut self, rule_id: impl Into<String>) -> Self {
        self.rule_id = Some(rule_id.into());
        self
    }

    pub fn from_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_cause(mut self, cause: Cause) -> Self {
        self.cause = Some(cause);
        self
    }

    pub fn with_ancestors(mut self, ancestors: Vec<TraceNode>) -> Self {
        self.ancestors = ancestors;
        self
    }

    /// The one string shown as the message's reason: the wrapped error's
    /// stack when present, the plain reason otherwise.
    pub fn display_reason(&self) -> &str {
        self.stack.as_deref().unwrap_or(&self.reason)
    }

    /// Ordering key within a file: start line, then start column. Messages
    /// without a position sort first.
    pub(crate) fn sort_key(&self) -> (usize, usize) {
        self.position
            .map(|span| (span.start.line, span.start.column))
            .unwrap_or((0, 0))
    }

    pub(crate) fn compare_position(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_point_display() {
        assert_eq!(Span::point(3, 2).to_string(), "3:2");
    }

    #[test]
    fn test_span_range_display() {
        assert_eq!(Span::range(1, 27, 2, 3).to_string(), "1:27-2:3");
    }

    #[test]
    fn test_span_trivial_end_displays_as_point() {
        let span = Span {
            start: Point::new(4, 8),
            end: Some(Point::new(0, 0)),
        };
        assert_eq!(span.to_string(), "4:8");
    }

    #[test]
    fn test_display_reason_prefers_stack() {
        let message = Message::error("boom").with_stack("Error: boom\n    at main");
        assert_eq!(message.display_reason(), "Error: boom\n    at main");
    }

    #[test]
    fn test_sort_key_missing_position_is_zero() {
        let message = Message::warning("w");
        assert_eq!(message.sort_key(), (0, 0));

        let placed = Message::warning("w").at(Span::point(3, 2));
        assert_eq!(placed.sort_key(), (3, 2));
    }

    #[test]
    fn test_message_from_json() {
        let message: Message = serde_json::from_str(
            r#"{
                "reason": "Unexpected token",
                "severity": "error",
                "position": {"start": {"line": 2, "column": 5}},
                "ruleId": "parse-error",
                "source": "acme-parser"
            }"#,
        )
        .unwrap();

        assert_eq!(message.severity, Severity::Error);
        assert_eq!(message.position, Some(Span::point(2, 5)));
        assert_eq!(message.rule_id.as_deref(), Some("parse-error"));
    }

    #[test]
    fn test_message_severity_defaults_to_info() {
        let message: Message = serde_json::from_str(r#"{"reason": "heads up"}"#).unwrap();
        assert_eq!(message.severity, Severity::Info);
    }
}
