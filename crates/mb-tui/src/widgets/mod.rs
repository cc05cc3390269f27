//! Birth screen widgets
//!
//! Each screen is laid out on a fixed 80x24 grid anchored at the top left
//! of the render area. Text that falls outside the area is clipped.

mod confirm;
mod menus;
mod roller;

pub use confirm::{ConfirmWidget, QuickStartWidget};
pub use menus::MenusWidget;
pub use roller::{PointBasedWidget, StandardWidget};

use mb_core::birth::{BirthScreen, CascadeStep, CharacterSummary};
use ratatui::prelude::*;
use ratatui::widgets::Widget;

use crate::theme::Theme;

/// Row of the question hint
pub const QUESTION_ROW: u16 = 7;
/// First row of the menus and help panels
pub const TABLE_ROW: u16 = 9;
pub const QUESTION_COL: u16 = 2;
/// Rows available to each menu below `TABLE_ROW`
pub const MENU_ROWS: u16 = 15;

pub const SEX_COL: u16 = 2;
pub const RACE_COL: u16 = 14;
pub const RACE_AUX_COL: u16 = 29;
pub const CLASS_COL: u16 = 29;
pub const CLASS_AUX_COL: u16 = 45;
pub const ROLLER_COL: u16 = 45;

/// Row of the bottom-line prompts
pub const PROMPT_ROW: u16 = 23;

/// Column where summary values start
pub const SUMMARY_VALUE_COL: u16 = 15;

pub const RESTART_FOOTER: &str =
    "[Press 'ESC' at any time to restart this step, or 'Ctrl-X' to quit]";

/// Column of the menu for a cascade step
pub fn menu_column(step: CascadeStep) -> u16 {
    match step {
        CascadeStep::Sex => SEX_COL,
        CascadeStep::Race => RACE_COL,
        CascadeStep::Class => CLASS_COL,
        CascadeStep::Roller => ROLLER_COL,
    }
}

/// Column of the help panel shown next to a cascade step, if it has one
pub fn help_column(step: CascadeStep) -> Option<u16> {
    match step {
        CascadeStep::Race => Some(RACE_AUX_COL),
        CascadeStep::Class => Some(CLASS_AUX_COL),
        CascadeStep::Sex | CascadeStep::Roller => None,
    }
}

/// Write `text` at grid position (col, row) relative to `area`
pub(crate) fn put(buf: &mut Buffer, area: Rect, col: u16, row: u16, text: &str, style: Style) {
    if col >= area.width || row >= area.height {
        return;
    }
    let width = (area.width - col) as usize;
    buf.set_stringn(area.x + col, area.y + row, text, width, style);
}

/// Name, sex, race and class block shared by the roller and confirm screens
pub(crate) fn render_summary(
    summary: &CharacterSummary,
    theme: &Theme,
    area: Rect,
    buf: &mut Buffer,
) {
    let label = Style::default().fg(theme.text);
    let value = Style::default().fg(theme.value);
    let rows = [
        (2, "Name        :", summary.name.as_str()),
        (4, "Sex         :", summary.sex.as_str()),
        (5, "Race        :", summary.race.as_str()),
        (6, "Class       :", summary.class.as_str()),
    ];
    for (row, text, val) in rows {
        put(buf, area, 1, row, text, label);
        put(buf, area, SUMMARY_VALUE_COL, row, val, value);
    }
}

/// Any birth screen, dispatched to its widget
pub struct ScreenWidget<'a> {
    screen: &'a BirthScreen,
    theme: &'a Theme,
}

impl<'a> ScreenWidget<'a> {
    pub fn new(screen: &'a BirthScreen, theme: &'a Theme) -> Self {
        Self { screen, theme }
    }
}

impl Widget for ScreenWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.screen {
            BirthScreen::QuickStart(prompt) => {
                QuickStartWidget::new(*prompt, self.theme).render(area, buf)
            }
            BirthScreen::Menus(view) => MenusWidget::new(view, self.theme).render(area, buf),
            BirthScreen::PointBased(view) => {
                PointBasedWidget::new(view, self.theme).render(area, buf)
            }
            BirthScreen::Standard(view) => StandardWidget::new(view, self.theme).render(area, buf),
            BirthScreen::Confirm(view) => ConfirmWidget::new(view, self.theme).render(area, buf),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_util::row_text;
    use super::*;

    #[test]
    fn test_put_clips_outside_area() {
        let area = Rect::new(0, 0, 10, 2);
        let mut buf = Buffer::empty(area);
        put(&mut buf, area, 6, 0, "abcdefgh", Style::default());
        put(&mut buf, area, 0, 5, "never", Style::default());
        put(&mut buf, area, 12, 0, "never", Style::default());
        assert_eq!(row_text(&buf, 0), "      abcd");
        assert_eq!(row_text(&buf, 1), "");
    }

    #[test]
    fn test_summary_layout() {
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        let summary = CharacterSummary {
            name: "Frodo".into(),
            sex: "Male".into(),
            race: "Hobbit".into(),
            class: "Rogue".into(),
        };
        render_summary(&summary, &Theme::dark(), area, &mut buf);
        assert_eq!(row_text(&buf, 2), " Name        : Frodo");
        assert_eq!(row_text(&buf, 5), " Race        : Hobbit");
        assert_eq!(buf[(15, 6)].fg, Theme::dark().value);
    }

    #[test]
    fn test_columns() {
        assert_eq!(menu_column(CascadeStep::Class), CLASS_COL);
        assert_eq!(help_column(CascadeStep::Race), Some(RACE_AUX_COL));
        assert_eq!(help_column(CascadeStep::Roller), None);
    }
}
