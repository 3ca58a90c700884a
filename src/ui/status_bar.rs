use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use crate::error::Notice;

pub struct StatusBar<'a> {
    pub hints: &'a [(String, &'static str)],
    pub notice: Option<&'a Notice>,
    pub menu_open: bool,
}

impl<'a> Widget for StatusBar<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if let Some(notice) = self.notice {
            let color = if notice.hint.is_empty() {
                Color::Green
            } else {
                Color::Yellow
            };
            let mut spans = vec![Span::styled(
                format!(" {} ", notice.message),
                Style::default().fg(color),
            )];
            if !notice.hint.is_empty() {
                spans.push(Span::styled(
                    format!("({})", notice.hint),
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::DIM),
                ));
            }
            Line::from(spans).render(area, buf);
            return;
        }

        if !self.menu_open {
            let line = Line::from(Span::styled(
                " -- EDIT -- ",
                Style::default().fg(Color::Green),
            ));
            line.render(area, buf);
            return;
        }

        let mut spans = Vec::new();
        spans.push(Span::raw(" "));

        for (i, (key, action)) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", Style::default().fg(Color::DarkGray)));
            }
            spans.push(Span::styled(
                format!("[{}]", key),
                Style::default().fg(Color::Cyan),
            ));
            spans.push(Span::styled(
                action.to_string(),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::DIM),
            ));
        }

        Line::from(spans).render(area, buf);
    }
}
