//! Final confirmation and quick-start widgets

use mb_core::birth::{ConfirmView, PointRow, QuickPrompt};
use mb_core::player::{Stat, StatRoll, modify_stat_value, stat_cost};
use ratatui::prelude::*;
use ratatui::widgets::Widget;

use super::roller::{render_point_table, stat_label};
use super::{PROMPT_ROW, SUMMARY_VALUE_COL, put, render_summary};
use crate::theme::Theme;

pub const CONFIRM_PROMPT: &str =
    "['ESC' to step back, 'S' to start over, or any other key to continue]";

pub const QUICK_START_QUESTION: &str = "Quick-start character based on previous one (y/n)? ";

pub const QUICK_START_FOOTER: &str =
    "['Ctrl-X' to quit, 'ESC' to start over, or any other key to continue]";

/// The finished character with the confirm prompt
pub struct ConfirmWidget<'a> {
    view: &'a ConfirmView,
    theme: &'a Theme,
}

impl<'a> ConfirmWidget<'a> {
    pub fn new(view: &'a ConfirmView, theme: &'a Theme) -> Self {
        Self { view, theme }
    }
}

impl Widget for ConfirmWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = Style::default().fg(self.theme.text);
        render_summary(&self.view.summary, self.theme, area, buf);

        match &self.view.stats.roll {
            StatRoll::Points(values) => {
                let rows: Vec<PointRow> = Stat::ALL
                    .iter()
                    .map(|&stat| {
                        let value = values[stat.index()];
                        let adj = self.view.adjustments[stat.index()];
                        PointRow {
                            stat,
                            value,
                            best: modify_stat_value(i32::from(value), adj),
                            cost: stat_cost(value),
                        }
                    })
                    .collect();
                render_point_table(&rows, None, false, self.theme, area, buf);
            }
            StatRoll::Order(order) => {
                put(buf, area, 1, 8, "Stat roll   :", text);
                let value = Style::default().fg(self.theme.value);
                for (i, stat) in order.iter().enumerate() {
                    let adj = self.view.adjustments[stat.index()];
                    let line = format!("{}{:+3}", stat_label(*stat), adj);
                    let style = if adj == 0 {
                        value
                    } else {
                        Style::default().fg(self.theme.adjustment(adj))
                    };
                    put(buf, area, SUMMARY_VALUE_COL, 8 + i as u16, &line, style);
                }
            }
        }

        put(buf, area, 1, PROMPT_ROW, CONFIRM_PROMPT, text);
    }
}

/// Quick-start question, then the last-chance footer
pub struct QuickStartWidget<'a> {
    prompt: QuickPrompt,
    theme: &'a Theme,
}

impl<'a> QuickStartWidget<'a> {
    pub fn new(prompt: QuickPrompt, theme: &'a Theme) -> Self {
        Self { prompt, theme }
    }
}

impl Widget for QuickStartWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        put(buf, area, 2, 2, QUICK_START_QUESTION, Style::default().fg(self.theme.text));
        if self.prompt == QuickPrompt::Confirm {
            put(
                buf,
                area,
                5,
                PROMPT_ROW,
                QUICK_START_FOOTER,
                Style::default().fg(self.theme.text_dim),
            );
        }
    }
}
