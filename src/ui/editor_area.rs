use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

pub struct EditorArea<'a> {
    pub lines: &'a [String],
    pub cursor_row: usize,
}

/// First visible line so that `cursor_row` stays on screen.
pub fn scroll_offset(cursor_row: usize, height: usize) -> usize {
    if height == 0 {
        return 0;
    }
    cursor_row.saturating_sub(height - 1)
}

fn render_centered_message(msg: &str, area: Rect, buf: &mut Buffer) {
    if area.height > 0 {
        let line = Line::styled(msg, Style::default().fg(Color::DarkGray));
        let y = area.y + area.height / 2;
        let render_area = Rect::new(area.x, y, area.width, 1);
        line.render(render_area, buf);
    }
}

impl<'a> Widget for EditorArea<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.lines.iter().all(|l| l.is_empty()) && self.lines.len() <= 1 {
            render_centered_message("  Start typing. / opens the command menu.", area, buf);
            return;
        }

        let offset = scroll_offset(self.cursor_row, area.height as usize);
        for (screen_row, (i, text)) in self
            .lines
            .iter()
            .enumerate()
            .skip(offset)
            .take(area.height as usize)
            .enumerate()
        {
            let style = if i == self.cursor_row {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::Gray)
            };
            let line = Line::from(Span::styled(text.as_str(), style));
            let line_area = Rect::new(area.x, area.y + screen_row as u16, area.width, 1);
            line.render(line_area, buf);
        }
    }
}
