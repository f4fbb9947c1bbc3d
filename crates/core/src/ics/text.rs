//! Text escaping and line folding for iCalendar content lines.
//!
//! Calendar clients silently drop documents that break these rules:
//!
//! - TEXT values escape backslash, newline, comma and semicolon with a backslash.
//! - Content lines longer than 75 octets are folded. Continuation lines start
//!   with a single space, and a fold never splits a UTF-8 sequence or an
//!   escape pair.

/// Maximum length of a physical line in octets, excluding the CRLF.
pub const MAX_LINE_OCTETS: usize = 75;

/// Escapes a raw user string for use as a TEXT property value.
///
/// The input is always treated as raw text, so an existing backslash is
/// escaped again rather than being interpreted. Carriage returns are
/// normalised: `\r\n` and a lone `\r` both become `\n`.
///
/// # Examples
///
/// ```
/// use calfeed_core::ics::escape_text;
///
/// assert_eq!(escape_text("a;b,c\\d"), "a\\;b\\,c\\\\d");
/// assert_eq!(escape_text("line one\nline two"), "line one\\nline two");
/// ```
pub fn escape_text(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                escaped.push_str("\\n");
            }
            ',' => escaped.push_str("\\,"),
            ';' => escaped.push_str("\\;"),
            other => escaped.push(other),
        }
    }

    escaped
}

/// Reverses [`escape_text`].
///
/// Unknown escape sequences are kept verbatim, and `\N` is accepted as a
/// newline the way most clients do.
pub fn unescape_text(s: &str) -> String {
    let mut unescaped = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            unescaped.push(c);
            continue;
        }
        match chars.next() {
            Some('n') | Some('N') => unescaped.push('\n'),
            Some(next @ ('\\' | ',' | ';')) => unescaped.push(next),
            Some(other) => {
                unescaped.push('\\');
                unescaped.push(other);
            }
            None => unescaped.push('\\'),
        }
    }

    unescaped
}

/// Splits a logical content line into physical lines of at most
/// [`MAX_LINE_OCTETS`] octets.
///
/// The first line has no leading space. Each continuation line starts with
/// exactly one space, which counts towards its length. Lines that already fit
/// are returned unchanged.
///
/// # Examples
///
/// ```
/// use calfeed_core::ics::fold_line;
///
/// let line = format!("SUMMARY:{}", "x".repeat(100));
/// let folded = fold_line(&line);
///
/// assert_eq!(folded.len(), 2);
/// assert!(folded.iter().all(|l| l.len() <= 75));
/// assert!(folded[1].starts_with(' '));
/// ```
pub fn fold_line(line: &str) -> Vec<String> {
    if line.len() <= MAX_LINE_OCTETS {
        return vec![line.to_string()];
    }

    let mut lines = Vec::with_capacity(line.len() / (MAX_LINE_OCTETS - 1) + 1);
    let mut current = String::with_capacity(MAX_LINE_OCTETS);

    for unit in fold_units(line) {
        if !current.is_empty() && current.len() + unit.len() > MAX_LINE_OCTETS {
            lines.push(std::mem::take(&mut current));
            current.push(' ');
        }
        current.push_str(unit);
    }
    lines.push(current);

    lines
}

/// Joins folded physical lines back into logical lines.
///
/// Accepts a whole document (CRLF or LF separated). A line starting with a
/// space is a continuation: the space is stripped and the remainder appended
/// to the previous logical line.
pub fn unfold_lines(document: &str) -> Vec<String> {
    let mut logical: Vec<String> = Vec::new();

    for physical in document.split('\n') {
        let physical = physical.strip_suffix('\r').unwrap_or(physical);
        match (physical.strip_prefix(' '), logical.last_mut()) {
            (Some(rest), Some(previous)) => previous.push_str(rest),
            _ if physical.is_empty() => {}
            _ => logical.push(physical.to_string()),
        }
    }

    logical
}

/// Iterates over the indivisible pieces of a content line: single characters,
/// or a backslash together with the character it escapes.
fn fold_units(line: &str) -> impl Iterator<Item = &str> {
    let mut rest = line;
    std::iter::from_fn(move || {
        let mut chars = rest.chars();
        let first = chars.next()?;
        let mut width = first.len_utf8();
        if first == '\\' {
            if let Some(escaped) = chars.next() {
                width += escaped.len_utf8();
            }
        }
        let (unit, tail) = rest.split_at(width);
        rest = tail;
        Some(unit)
    })
}
