use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::ui::theme::Theme;

pub struct MenuItem {
    pub label: String,
    pub description: String,
    pub done: bool,
}

pub struct Menu<'a> {
    pub title: String,
    pub subtitle: String,
    pub items: Vec<MenuItem>,
    pub selected: usize,
    pub theme: &'a Theme,
}

impl<'a> Menu<'a> {
    pub fn new(title: &str, subtitle: &str, items: Vec<MenuItem>, theme: &'a Theme) -> Self {
        Self {
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            items,
            selected: 0,
            theme,
        }
    }

    pub fn next(&mut self) {
        if !self.items.is_empty() {
            self.selected = (self.selected + 1) % self.items.len();
        }
    }

    pub fn prev(&mut self) {
        if self.items.is_empty() {
            return;
        }
        if self.selected > 0 {
            self.selected -= 1;
        } else {
            self.selected = self.items.len() - 1;
        }
    }
}

/// First visible row so that `selected` stays on screen.
pub fn scroll_offset(selected: usize, visible: usize, total: usize) -> usize {
    if visible == 0 || total <= visible {
        return 0;
    }
    selected.saturating_sub(visible - 1).min(total - visible)
}

impl Widget for &Menu<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Min(1),
                Constraint::Length(2),
            ])
            .split(inner);

        let title_lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                &*self.title,
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(&*self.subtitle, Style::default().fg(colors.fg()))),
        ];
        Paragraph::new(title_lines)
            .alignment(Alignment::Center)
            .render(layout[0], buf);

        let visible = layout[1].height as usize;
        let offset = scroll_offset(self.selected, visible, self.items.len());
        let lines: Vec<Line> = self
            .items
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .map(|(i, item)| {
                let is_selected = i == self.selected;
                let indicator = if is_selected { ">" } else { " " };
                let check = if item.done { "✓" } else { " " };
                let style = if is_selected {
                    Style::default()
                        .fg(colors.accent())
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(colors.fg())
                };
                Line::from(vec![
                    Span::styled(format!(" {indicator} "), style),
                    Span::styled(check, Style::default().fg(colors.success())),
                    Span::styled(format!(" {}", item.label), style),
                ])
            })
            .collect();
        Paragraph::new(lines).render(layout[1], buf);

        if let Some(item) = self.items.get(self.selected) {
            Paragraph::new(Line::from(Span::styled(
                format!("   {}", item.description),
                Style::default().fg(colors.text_pending()),
            )))
            .wrap(Wrap { trim: false })
            .render(layout[2], buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_keeps_selection_visible() {
        assert_eq!(scroll_offset(0, 5, 20), 0);
        assert_eq!(scroll_offset(4, 5, 20), 0);
        assert_eq!(scroll_offset(5, 5, 20), 1);
        assert_eq!(scroll_offset(19, 5, 20), 15);
    }

    #[test]
    fn scroll_is_zero_when_everything_fits() {
        assert_eq!(scroll_offset(3, 10, 4), 0);
        assert_eq!(scroll_offset(3, 0, 4), 0);
    }

    #[test]
    fn next_and_prev_wrap() {
        let theme = Theme::default();
        let items = (0..3)
            .map(|i| MenuItem {
                label: format!("item {i}"),
                description: String::new(),
                done: false,
            })
            .collect();
        let mut menu = Menu::new("t", "s", items, &theme);
        menu.prev();
        assert_eq!(menu.selected, 2);
        menu.next();
        assert_eq!(menu.selected, 0);
    }
}
