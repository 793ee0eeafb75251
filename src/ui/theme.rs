use crossterm::style::{force_color_output, Color, Stylize};

/// Design tokens for the branding-check CLI output.
///
/// All colors and icons used by the views are sourced from this module.
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const OK: &str = "✅";
    pub const WARNING: &str = "⚠";
}

/// Leave every color decision to `UiContext`; crossterm otherwise drops
/// styling whenever `NO_COLOR` is set.
pub fn take_color_control() {
    force_color_output(true);
}

/// Wrap `text` in ANSI color codes when `enabled`
pub fn paint(text: &str, color: Color, enabled: bool) -> String {
    if !enabled {
        return text.to_string();
    }
    format!("{}", text.with(color))
}
