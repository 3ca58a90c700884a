use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

pub struct Header {
    pub trigger: char,
    pub mouse: bool,
}

impl Widget for Header {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = Span::styled(
            " slash-menu ",
            Style::default()
                .fg(Color::White)
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        );

        let trigger = Span::styled(
            format!(" [type {} for commands] ", self.trigger),
            Style::default().fg(Color::Cyan).bg(Color::DarkGray),
        );

        let mouse_text = if self.mouse { "mouse on " } else { "mouse off " };
        let spacer_len = area.width.saturating_sub(
            title.width() as u16 + trigger.width() as u16 + mouse_text.len() as u16,
        );
        let bg = Style::default().bg(Color::DarkGray);
        let spacer = Span::styled(" ".repeat(spacer_len as usize), bg);

        let mouse = Span::styled(
            mouse_text,
            Style::default().fg(Color::Gray).bg(Color::DarkGray),
        );

        let line = Line::from(vec![title, trigger, spacer, mouse]);
        line.render(area, buf);
    }
}
