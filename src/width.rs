//! ANSI-aware display width measurement.
//!
//! Column alignment needs the *visible* width of a cell: embedded ANSI
//! styling sequences occupy no columns, East-Asian wide characters occupy
//! two, and combining characters occupy none. Only the text before the first
//! line break participates in alignment; callers split multi-line text
//! before measuring.

use unicode_width::UnicodeWidthChar;

/// Visible display width of `text`, up to the first line break.
///
/// ANSI CSI sequences (`ESC [` up to and including the final byte) and OSC
/// sequences (`ESC ]` up to BEL or ST, e.g. terminal hyperlinks) are
/// skipped. Control and otherwise unmeasurable characters count as zero
/// columns. Never fails.
pub fn display_width(text: &str) -> usize {
    let mut width = 0;
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        match c {
            '\r' | '\n' => break,
            '\x1b' => match chars.clone().next() {
                Some('[') => {
                    chars.next();
                    // Parameter and intermediate bytes run until a final
                    // byte in `@`..=`~`.
                    for follow in chars.by_ref() {
                        if ('\x40'..='\x7e').contains(&follow) {
                            break;
                        }
                    }
                }
                Some(']') => {
                    chars.next();
                    // The payload runs until BEL or ST (`ESC \`).
                    while let Some(follow) = chars.next() {
                        if follow == '\x07' {
                            break;
                        }
                        if follow == '\x1b' && chars.clone().next() == Some('\\') {
                            chars.next();
                            break;
                        }
                    }
                }
                _ => {}
            },
            _ => width += c.width().unwrap_or(0),
        }
    }

    width
}
