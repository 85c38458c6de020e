use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use drillbox::session::{Feedback, Item};

use crate::ui::line_input::LineInput;
use crate::ui::theme::Theme;

pub enum CardBody<'a> {
    /// Flashcard: glyph with its answer shown underneath.
    Study,
    /// Quiz prompt: answer field plus the banner of the last submission
    /// while it is still on screen.
    Quiz {
        input: &'a LineInput,
        feedback: Option<&'a Feedback>,
    },
}

pub struct PromptCard<'a> {
    pub title: &'a str,
    pub item: &'a Item,
    pub body: CardBody<'a>,
    pub theme: &'a Theme,
}

impl Widget for PromptCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(format!(" {} ", self.title))
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                &*self.item.display,
                Style::default()
                    .fg(colors.glyph())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        match self.body {
            CardBody::Study => {
                lines.push(Line::from(Span::styled(
                    &*self.item.answer,
                    Style::default().fg(colors.accent()),
                )));
            }
            CardBody::Quiz { input, feedback } => {
                let (before, at, after) = input.render_parts();
                let cursor_style = Style::default().fg(colors.bg()).bg(colors.fg());
                lines.push(Line::from(vec![
                    Span::styled("> ", Style::default().fg(colors.text_pending())),
                    Span::styled(before, Style::default().fg(colors.fg())),
                    Span::styled(
                        at.map_or_else(|| " ".to_string(), |c| c.to_string()),
                        cursor_style,
                    ),
                    Span::styled(after, Style::default().fg(colors.fg())),
                ]));
                lines.push(Line::from(""));
                if let Some(fb) = feedback {
                    let (text, color) = if fb.correct {
                        ("Correct! Well done!".to_string(), colors.success())
                    } else {
                        (
                            format!("Not quite. {} is \"{}\"", fb.display, fb.expected),
                            colors.error(),
                        )
                    };
                    lines.push(Line::from(Span::styled(
                        text,
                        Style::default().fg(color).add_modifier(Modifier::BOLD),
                    )));
                }
            }
        }

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
