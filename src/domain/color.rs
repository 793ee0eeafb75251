//! Hex color format check

use super::text::strip;

/// `true` iff `value`, trimmed, is `#` followed by exactly six hex digits.
pub fn is_hex_color(value: &str) -> bool {
    let Some(digits) = strip(value).strip_prefix('#') else {
        return false;
    };
    digits.len() == 6 && digits.bytes().all(|b| b.is_ascii_hexdigit())
}
