//! Escaping, folding and date helpers shared by the vCard writer.

use std::borrow::Cow;

/// Maximum content line length in UTF-8 octets, excluding the CRLF.
pub const MAX_LINE_OCTETS: usize = 75;

const FOLD_SEPARATOR: &str = "\r\n ";

/// Escapes a text value: `\` first, then `,` and `;`, and every `\r\n` or
/// `\n` becomes the two characters `\n`.
pub fn escape_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => out.push_str("\\\\"),
            ',' => out.push_str("\\,"),
            ';' => out.push_str("\\;"),
            '\n' => out.push_str("\\n"),
            '\r' if chars.peek() == Some(&'\n') => {
                chars.next();
                out.push_str("\\n");
            }
            _ => out.push(ch),
        }
    }
    out
}

/// Reverses [`escape_value`]. Used to check output, not to import cards.
pub fn unescape_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            match chars.next() {
                Some('n') | Some('N') => out.push('\n'),
                Some(other) => out.push(other),
                None => break,
            }
        } else {
            out.push(ch);
        }
    }
    out
}

/// Folds one assembled `KEY:value` line. The first segment holds up to 75
/// octets, every continuation starts with CRLF and a space and holds up to
/// 74 more. Segments always end on a char boundary.
pub fn fold_line(line: &str) -> String {
    if line.len() <= MAX_LINE_OCTETS {
        return line.to_string();
    }

    let segments = line.len() / (MAX_LINE_OCTETS - 1) + 1;
    let mut out = String::with_capacity(line.len() + segments * FOLD_SEPARATOR.len());
    let mut rest = line;
    let mut limit = MAX_LINE_OCTETS;
    while !rest.is_empty() {
        if limit != MAX_LINE_OCTETS {
            out.push_str(FOLD_SEPARATOR);
        }
        let end = split_point(rest, limit);
        out.push_str(&rest[..end]);
        rest = &rest[end..];
        limit = MAX_LINE_OCTETS - 1;
    }
    out
}

fn split_point(value: &str, limit: usize) -> usize {
    if value.len() <= limit {
        return value.len();
    }
    let mut end = limit;
    while end > 0 && !value.is_char_boundary(end) {
        end -= 1;
    }
    end
}

/// Joins folded continuation lines back into logical lines. Accepts CRLF,
/// LF and CR line endings.
pub fn unfold_lines(input: &str) -> Vec<String> {
    let input = normalize_line_endings(input);
    let mut lines: Vec<String> = Vec::new();
    for line in input.lines() {
        if let Some(continuation) = line.strip_prefix(&[' ', '\t'][..]) {
            match lines.last_mut() {
                Some(last) => last.push_str(continuation),
                None => lines.push(continuation.to_string()),
            }
        } else {
            lines.push(line.to_string());
        }
    }
    lines
}

fn normalize_line_endings(input: &str) -> Cow<'_, str> {
    if !input.contains('\r') {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\r' {
            if matches!(chars.peek(), Some('\n')) {
                chars.next();
            }
            out.push('\n');
        } else {
            out.push(ch);
        }
    }
    Cow::Owned(out)
}

/// `YYYY-MM-DD` becomes `YYYYMMDD`; any other shape passes through.
pub fn format_date_for_vcf(value: &str) -> Cow<'_, str> {
    let bytes = value.as_bytes();
    let iso_shape = bytes.len() == 10
        && bytes.iter().enumerate().all(|(idx, byte)| match idx {
            4 | 7 => *byte == b'-',
            _ => byte.is_ascii_digit(),
        });
    if iso_shape {
        Cow::Owned(value.replace('-', ""))
    } else {
        Cow::Borrowed(value)
    }
}
