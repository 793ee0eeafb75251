//! String helpers shared by the presence, color and logo checks

/// Whitespace as the branding tooling has always treated it: Unicode
/// `White_Space` plus the ASCII file/group/record/unit separators.
fn is_blank_char(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Strip leading and trailing blank characters
pub fn strip(value: &str) -> &str {
    value.trim_matches(is_blank_char)
}

/// Characters that must never reach the report verbatim
fn needs_escape(c: char) -> bool {
    if c == ' ' {
        return false;
    }
    c.is_control()
        || c.is_whitespace()
        || matches!(
            c,
            '\u{ad}'
                | '\u{200b}'..='\u{200f}'
                | '\u{202a}'..='\u{202e}'
                | '\u{2060}'..='\u{2064}'
                | '\u{feff}'
        )
}

/// Quote a user-supplied value for a single report line.
///
/// Single quotes are used unless the value contains `'` and no `"`.
/// Backslashes, the chosen quote, and non-printable characters are
/// escaped, so the result never spans more than one line.
pub fn quote(value: &str) -> String {
    let delim = if value.contains('\'') && !value.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(value.len() + 2);
    out.push(delim);
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            c if c == delim => {
                out.push('\\');
                out.push(c);
            }
            c => push_escaped(&mut out, c),
        }
    }
    out.push(delim);
    out
}

/// Escape only non-printable characters, leaving the text unquoted.
///
/// Used for repo-relative paths built from document values.
pub fn escape_controls(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        push_escaped(&mut out, c);
    }
    out
}

fn push_escaped(out: &mut String, c: char) {
    match c {
        '\n' => out.push_str("\\n"),
        '\r' => out.push_str("\\r"),
        '\t' => out.push_str("\\t"),
        c if needs_escape(c) => {
            let code = c as u32;
            if code < 0x100 {
                out.push_str(&format!("\\x{:02x}", code));
            } else if code < 0x10000 {
                out.push_str(&format!("\\u{:04x}", code));
            } else {
                out.push_str(&format!("\\U{:08x}", code));
            }
        }
        c => out.push(c),
    }
}
