//! Color helpers driven by an explicit capability flag.
//!
//! Whether the terminal supports color is the caller's concern; nothing in
//! this module (or the crate) reads process or environment state, so the
//! same inputs always produce the same output.

use owo_colors::OwoColorize;

use crate::message::Severity;
use crate::stats::Statistics;

pub(crate) fn severity_label(severity: Severity, color: bool) -> String {
    let text = severity.to_string();
    if !color {
        return text;
    }
    match severity {
        Severity::Error => text.red().to_string(),
        Severity::Warning | Severity::Info => text.yellow().to_string(),
    }
}

/// File name in a header, underlined and colored by the file's worst
/// status: red if any fatal message, yellow if any message at all, green
/// when clean.
pub(crate) fn file_label(name: &str, stats: &Statistics, color: bool) -> String {
    if !color {
        return name.to_string();
    }
    if stats.fatal > 0 {
        name.underline().red().to_string()
    } else if stats.total() > 0 {
        name.underline().yellow().to_string()
    } else {
        name.underline().green().to_string()
    }
}

pub(crate) fn written_label(color: bool) -> String {
    if color {
        "written".yellow().to_string()
    } else {
        "written".to_string()
    }
}

pub(crate) fn red(text: &str, color: bool) -> String {
    if color {
        text.red().to_string()
    } else {
        text.to_string()
    }
}

pub(crate) fn yellow(text: &str, color: bool) -> String {
    if color {
        text.yellow().to_string()
    } else {
        text.to_string()
    }
}

/// Render inline code spans in cyan when color is on.
///
/// A run of N backticks opens a span closed by the next run of exactly N;
/// unbalanced runs render verbatim. Purely cosmetic: alignment measures
/// visible width, which styling does not change.
pub(crate) fn style_code_spans(text: &str, color: bool) -> String {
    if !color || !text.contains('`') {
        return text.to_string();
    }

    let chars: Vec<char> = text.chars().collect();
    let mut out = String::new();
    let mut i = 0;

    while i < chars.len() {
        if chars[i] == '`' {
            let open = run_length(&chars, i);
            if let Some(close) = find_closing_run(&chars, i + open, open) {
                let span: String = chars[i..close + open].iter().collect();
                out.push_str(&span.cyan().to_string());
                i = close + open;
                continue;
            }
        }
        out.push(chars[i]);
        i += 1;
    }

    out
}

fn run_length(chars: &[char], at: usize) -> usize {
    chars[at..].iter().take_while(|&&c| c == '`').count()
}

/// Index of the next backtick run of exactly `len`, at or after `from`.
fn find_closing_run(chars: &[char], from: usize, len: usize) -> Option<usize> {
    let mut i = from;
    while i < chars.len() {
        if chars[i] == '`' {
            let run = run_length(chars, i);
            if run == len {
                return Some(i);
            }
            i += run;
        } else {
            i += 1;
        }
    }
    None
}
