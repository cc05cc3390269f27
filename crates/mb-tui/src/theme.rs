//! Terminal color theme
//!
//! Adaptive palettes for dark and light terminal backgrounds. Auto-detects
//! via COLORFGBG, or manual override with --light or MB_LIGHT_BG=1.

use ratatui::style::Color;

/// Color theme for the birth screens.
/// Screen code uses theme colors instead of hardcoded Color:: values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Primary foreground text
    pub text: Color,
    /// Instructions and footers
    pub text_dim: Color,
    /// Menus already answered
    pub text_muted: Color,

    /// Highlighted entry of the active menu
    pub cursor_fg: Color,
    pub cursor_bg: Color,
    /// Highlighted entry of an answered menu
    pub chosen: Color,

    /// Question hint
    pub hint: Color,
    /// Character summary values
    pub value: Color,
    /// Stat values
    pub stat: Color,
    /// Keys named in instructions
    pub key: Color,
    /// Positive adjustments
    pub good: Color,
    /// Negative adjustments
    pub bad: Color,
}

impl Theme {
    /// Dark terminal background theme (default)
    pub fn dark() -> Self {
        Self {
            text: Color::White,
            text_dim: Color::Gray,
            text_muted: Color::DarkGray,
            cursor_fg: Color::LightBlue,
            cursor_bg: Color::Reset,
            chosen: Color::Blue,
            hint: Color::Yellow,
            value: Color::LightBlue,
            stat: Color::LightGreen,
            key: Color::LightGreen,
            good: Color::LightGreen,
            bad: Color::LightRed,
        }
    }

    /// Light terminal background theme
    pub fn light() -> Self {
        Self {
            text: Color::Black,
            text_dim: Color::DarkGray,
            text_muted: Color::Gray,
            cursor_fg: Color::Blue,
            cursor_bg: Color::Reset,
            chosen: Color::Blue,
            hint: Color::Magenta,
            value: Color::Blue,
            stat: Color::Green,
            key: Color::Green,
            good: Color::Green,
            bad: Color::Red,
        }
    }

    /// Auto-detect terminal background and return appropriate theme.
    /// Checks the MB_LIGHT_BG override, then COLORFGBG.
    pub fn detect() -> Self {
        let light = is_light_background(
            std::env::var("MB_LIGHT_BG").ok().as_deref(),
            std::env::var("COLORFGBG").ok().as_deref(),
        );
        if light { Self::light() } else { Self::dark() }
    }

    /// Color for a signed stat or skill adjustment
    pub fn adjustment(&self, value: i32) -> Color {
        match value {
            v if v > 0 => self.good,
            v if v < 0 => self.bad,
            _ => self.text,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}

/// Decide the background from the override variable and COLORFGBG.
///
/// COLORFGBG is "fg;bg" (sometimes "fg;default;bg") with color indices;
/// light backgrounds have bg 7 or 9..=15.
pub fn is_light_background(override_var: Option<&str>, colorfgbg: Option<&str>) -> bool {
    if let Some(val) = override_var {
        return val == "1" || val.eq_ignore_ascii_case("true");
    }

    if let Some(colorfgbg) = colorfgbg
        && let Some(bg_str) = colorfgbg.rsplit(';').next()
        && let Ok(bg_idx) = bg_str.parse::<u8>()
    {
        return matches!(bg_idx, 7 | 9..=15);
    }

    false
}
