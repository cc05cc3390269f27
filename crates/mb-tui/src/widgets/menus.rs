//! Cascade menus widget

use mb_core::birth::{MENU_INSTRUCTIONS, MenuView, MenusView};
use ratatui::prelude::*;
use ratatui::widgets::Widget;

use super::{MENU_ROWS, QUESTION_COL, QUESTION_ROW, TABLE_ROW, help_column, menu_column, put};
use crate::theme::Theme;

/// Instructions, the question hint, every open menu and the help panel
pub struct MenusWidget<'a> {
    view: &'a MenusView,
    theme: &'a Theme,
}

impl<'a> MenusWidget<'a> {
    pub fn new(view: &'a MenusView, theme: &'a Theme) -> Self {
        Self { view, theme }
    }

    fn render_menu(&self, menu: &MenuView, active: bool, area: Rect, buf: &mut Buffer) {
        let col = menu_column(menu.step);
        let rows = MENU_ROWS.min(area.height.saturating_sub(TABLE_ROW)) as usize;
        let top = scroll_offset(menu.cursor, menu.items.len(), rows);
        for (i, item) in menu.items.iter().enumerate().skip(top).take(rows) {
            let style = match (i == menu.cursor, active) {
                (true, true) => Style::default()
                    .fg(self.theme.cursor_fg)
                    .bg(self.theme.cursor_bg),
                (true, false) => Style::default().fg(self.theme.chosen),
                (false, true) => Style::default().fg(self.theme.text),
                (false, false) => Style::default().fg(self.theme.text_muted),
            };
            put(buf, area, col, TABLE_ROW + (i - top) as u16, item, style);
        }
    }
}

/// First item shown in a window of `rows` lines that keeps `cursor` visible
pub fn scroll_offset(cursor: usize, len: usize, rows: usize) -> usize {
    if rows == 0 || len <= rows {
        return 0;
    }
    let cursor = cursor.min(len - 1);
    (cursor + 1).saturating_sub(rows)
}

impl Widget for MenusWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let dim = Style::default().fg(self.theme.text_dim);
        put(buf, area, 1, 1, MENU_INSTRUCTIONS[0], dim);
        for (i, line) in MENU_INSTRUCTIONS[1..].iter().enumerate() {
            put(buf, area, 1, 3 + i as u16, line, dim);
        }

        put(
            buf,
            area,
            QUESTION_COL,
            QUESTION_ROW,
            self.view.hint,
            Style::default().fg(self.theme.hint),
        );

        let last = self.view.menus.len().saturating_sub(1);
        for (i, menu) in self.view.menus.iter().enumerate() {
            self.render_menu(menu, i == last, area, buf);
        }

        let help_col = self
            .view
            .active()
            .map(|menu| menu.step)
            .and_then(help_column);
        if let Some(col) = help_col {
            let style = Style::default().fg(self.theme.text);
            for (i, line) in self.view.help.iter().enumerate() {
                put(buf, area, col, TABLE_ROW + i as u16, line, style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::test_util::row_text;
    use mb_core::birth::CascadeStep;

    fn view() -> MenusView {
        MenusView {
            menus: vec![
                MenuView {
                    step: CascadeStep::Sex,
                    items: vec!["Female".into(), "Male".into(), "Neuter".into()],
                    cursor: 1,
                },
                MenuView {
                    step: CascadeStep::Race,
                    items: vec!["Human".into(), "Dwarf".into()],
                    cursor: 0,
                },
            ],
            hint: CascadeStep::Race.hint(),
            help: vec!["Str:  +0  Int:  +0".into()],
        }
    }

    fn render(view: &MenusView) -> Buffer {
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        MenusWidget::new(view, &Theme::dark()).render(area, &mut buf);
        buf
    }

    #[test]
    fn test_instructions_and_hint() {
        let view = view();
        let buf = render(&view);
        assert_eq!(row_text(&buf, 1).trim(), MENU_INSTRUCTIONS[0]);
        assert_eq!(row_text(&buf, 5).trim(), MENU_INSTRUCTIONS[3]);
        assert_eq!(row_text(&buf, QUESTION_ROW).trim(), view.hint);
        assert_eq!(buf[(QUESTION_COL, QUESTION_ROW)].fg, Theme::dark().hint);
    }

    #[test]
    fn test_menus_side_by_side_with_help() {
        let buf = render(&view());
        assert_eq!(
            row_text(&buf, TABLE_ROW),
            "  Female      Human          Str:  +0  Int:  +0"
        );
        assert_eq!(row_text(&buf, TABLE_ROW + 2), "  Neuter");
    }

    #[test]
    fn test_cursor_colors() {
        let theme = Theme::dark();
        let buf = render(&view());
        // answered menu keeps its choice marked
        assert_eq!(buf[(2, TABLE_ROW + 1)].fg, theme.chosen);
        assert_eq!(buf[(2, TABLE_ROW)].fg, theme.text_muted);
        // active menu
        assert_eq!(buf[(14, TABLE_ROW)].fg, theme.cursor_fg);
        assert_eq!(buf[(14, TABLE_ROW + 1)].fg, theme.text);
    }

    #[test]
    fn test_scroll_offset() {
        assert_eq!(scroll_offset(3, 10, 15), 0);
        assert_eq!(scroll_offset(14, 20, 15), 0);
        assert_eq!(scroll_offset(15, 20, 15), 1);
        assert_eq!(scroll_offset(19, 20, 15), 5);
        assert_eq!(scroll_offset(50, 20, 15), 5);
        assert_eq!(scroll_offset(4, 20, 0), 0);
    }

    #[test]
    fn test_long_menu_scrolls_to_cursor() {
        let items: Vec<String> = (0..20).map(|i| format!("Race {i}")).collect();
        let view = MenusView {
            menus: vec![MenuView {
                step: CascadeStep::Race,
                items,
                cursor: 18,
            }],
            hint: CascadeStep::Race.hint(),
            help: Vec::new(),
        };
        let theme = Theme::dark();
        let buf = render(&view);
        let last = TABLE_ROW + MENU_ROWS - 1;
        assert_eq!(row_text(&buf, TABLE_ROW).trim(), "Race 4");
        assert_eq!(row_text(&buf, last - 1).trim(), "Race 17");
        assert_eq!(row_text(&buf, last).trim(), "Race 18");
        assert_eq!(buf[(14, last)].fg, theme.cursor_fg);
    }
}
