//! Stat roller widgets

use mb_core::birth::{ORDER_THRESHOLDS, PointBasedView, PointRow, StandardView};
use mb_core::player::{Stat, format_stat};
use ratatui::prelude::*;
use ratatui::widgets::Widget;

use super::{PROMPT_ROW, RESTART_FOOTER, SUMMARY_VALUE_COL, put, render_summary};
use crate::theme::Theme;

/// Row of the point-based table header
pub const POINT_TABLE_ROW: u16 = 15;
const POINT_PROMPT_ROW: u16 = 13;

/// First row of the standard roller's stat order
const ORDER_ROW: u16 = 8;
const ORDER_QUESTION_ROW: u16 = 20;
/// Column spacing of the available stats under the order question
const ORDER_OPTION_WIDTH: u16 = 9;

/// Stat label as drawn in the roller tables
pub fn stat_label(stat: Stat) -> String {
    format!("{}: ", stat.short_name())
}

/// Self, Best and Cost columns for a set of stat rows
pub(crate) fn render_point_table(
    rows: &[PointRow],
    cursor: Option<usize>,
    show_cost: bool,
    theme: &Theme,
    area: Rect,
    buf: &mut Buffer,
) {
    let text = Style::default().fg(theme.text);
    let stat = Style::default().fg(theme.stat);

    put(buf, area, 10, POINT_TABLE_ROW, "  Self    Best", text);
    if show_cost {
        put(buf, area, 26, POINT_TABLE_ROW, "Cost", text);
    }

    for (i, row) in rows.iter().enumerate() {
        let y = POINT_TABLE_ROW + 1 + i as u16;
        let label = if cursor == Some(i) {
            Style::default().fg(theme.cursor_fg).bg(theme.cursor_bg)
        } else {
            text
        };
        put(buf, area, 5, y, &stat_label(row.stat), label);
        put(buf, area, 10, y, &format_stat(i32::from(row.value)), stat);
        put(buf, area, 18, y, &format_stat(row.best), stat);
        if show_cost {
            put(buf, area, 26, y, &format!("{:4}", row.cost), text);
        }
    }
}

/// Point-based roller: summary, cost prompt and the stat table
pub struct PointBasedWidget<'a> {
    view: &'a PointBasedView,
    theme: &'a Theme,
}

impl<'a> PointBasedWidget<'a> {
    pub fn new(view: &'a PointBasedView, theme: &'a Theme) -> Self {
        Self { view, theme }
    }
}

impl Widget for PointBasedWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = Style::default().fg(self.theme.text);
        render_summary(&self.view.summary, self.theme, area, buf);
        put(buf, area, 1, PROMPT_ROW, RESTART_FOOTER, Style::default().fg(self.theme.text_dim));

        let prompt = format!(
            "Total Cost {:2}/{}.  Use up/down to move, left/right to modify, 'Enter' to accept.",
            self.view.total_cost,
            PointBasedView::POOL
        );
        put(buf, area, 1, POINT_PROMPT_ROW, &prompt, text);

        render_point_table(
            &self.view.rows,
            Some(self.view.cursor),
            true,
            self.theme,
            area,
            buf,
        );
    }
}

/// Standard roller: the stat order chosen so far and the remaining stats
pub struct StandardWidget<'a> {
    view: &'a StandardView,
    theme: &'a Theme,
}

impl<'a> StandardWidget<'a> {
    pub fn new(view: &'a StandardView, theme: &'a Theme) -> Self {
        Self { view, theme }
    }
}

/// Explanation of the standard roller's minimums
pub fn standard_explanation() -> [String; 4] {
    let [first, second, third] = ORDER_THRESHOLDS;
    [
        "The standard roller will automatically ignore characters which do".to_string(),
        format!("not meet the minimum values of {first} for the first stat, {second} for the"),
        format!("second stat and {third} for the third stat specified below."),
        "Stats will be rolled randomly according to the specified order.".to_string(),
    ]
}

impl Widget for StandardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = Style::default().fg(self.theme.text);
        let value = Style::default().fg(self.theme.value);

        render_summary(&self.view.summary, self.theme, area, buf);
        put(buf, area, 1, ORDER_ROW, "Stat roll   :", text);
        put(buf, area, 1, PROMPT_ROW, RESTART_FOOTER, Style::default().fg(self.theme.text_dim));

        for (i, stat) in self.view.placed.iter().enumerate() {
            let y = ORDER_ROW + i as u16;
            put(buf, area, SUMMARY_VALUE_COL, y, &stat_label(*stat), value);
        }

        for (i, line) in standard_explanation().iter().enumerate() {
            put(buf, area, 5, 15 + i as u16, line, text);
        }

        put(buf, area, 2, ORDER_QUESTION_ROW, "Choose your stat order: ", text);
        let key = Style::default().fg(self.theme.key);
        for stat in &self.view.available {
            let x = stat.index() as u16 * ORDER_OPTION_WIDTH;
            let option = format!("{}) {}", stat.letter(), stat_label(*stat));
            put(buf, area, x, ORDER_QUESTION_ROW + 1, &option, key);
        }
    }
}
