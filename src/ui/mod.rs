pub mod editor_area;
pub mod header;
pub mod status_bar;

use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block as WidgetBlock, BorderType, Borders, Clear};
use ratatui::Frame;

use slash_menu::MenuView;

use crate::app::AppState;

use editor_area::{scroll_offset, EditorArea};
use header::Header;
use status_bar::StatusBar;

const POPUP_WIDTH: u16 = 44;

/// Where the menu popup sits and where its selectable rows start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopupLayout {
    pub area: Rect,
    pub rows: Rect,
}

impl PopupLayout {
    /// Index of the menu row under a terminal cell, if any.
    pub fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        self.rows
            .contains(Position::new(column, row))
            .then(|| (row - self.rows.y) as usize)
    }
}

fn split(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .split(area);
    (chunks[0], chunks[1], chunks[2])
}

/// Screen column of the cursor, pinned to the last editor cell on lines
/// wider than the editor.
fn cursor_x(editor: Rect, col: usize) -> u16 {
    let max = editor.width.saturating_sub(1);
    let col = u16::try_from(col).unwrap_or(u16::MAX).min(max);
    editor.x.saturating_add(col)
}

/// Popup geometry for the open menu, below the cursor when it fits and
/// above it otherwise.
pub fn popup_layout(viewport: Rect, state: &AppState) -> Option<PopupLayout> {
    let view = state.menu.view()?;
    let (_, editor, _) = split(viewport);

    let row_count = view.rows.len().max(1) as u16;
    let footer = u16::from(view.hidden > 0);
    let height = (row_count + footer + 2).min(editor.height);
    let width = POPUP_WIDTH.min(editor.width);

    let (row, col) = state.buffer.cursor_row_col();
    let offset = scroll_offset(row, editor.height as usize);
    let cursor_y = editor.y + (row - offset) as u16;
    let below = cursor_y + 1;
    let y = if below + height <= editor.y + editor.height {
        below
    } else {
        cursor_y.saturating_sub(height).max(editor.y)
    };
    let x = cursor_x(editor, col).min(editor.x + editor.width.saturating_sub(width));

    let area = Rect::new(x, y, width, height);
    let inner = WidgetBlock::default().borders(Borders::ALL).inner(area);
    let rows = Rect::new(
        inner.x,
        inner.y,
        inner.width,
        (view.rows.len() as u16).min(inner.height),
    );
    Some(PopupLayout { area, rows })
}

pub fn render(frame: &mut Frame, state: &AppState) {
    let (header_area, editor, status_area) = split(frame.area());

    let header = Header {
        trigger: state.menu.trigger(),
        mouse: state.menu.settings().enable_mouse,
    };
    frame.render_widget(header, header_area);

    let lines = state.buffer.lines();
    let (row, col) = state.buffer.cursor_row_col();
    let editor_widget = EditorArea {
        lines: &lines,
        cursor_row: row,
    };
    frame.render_widget(editor_widget, editor);

    if let (Some(view), Some(layout)) = (state.menu.view(), popup_layout(frame.area(), state)) {
        render_menu_popup(frame, &view, layout);
    } else {
        let offset = scroll_offset(row, editor.height as usize);
        frame.set_cursor_position((cursor_x(editor, col), editor.y + (row - offset) as u16));
    }

    let status = StatusBar {
        hints: &state.hints,
        notice: state.notice.as_ref(),
        menu_open: state.menu.is_open(),
    };
    frame.render_widget(status, status_area);
}

fn render_menu_popup(frame: &mut Frame, view: &MenuView<'_>, layout: PopupLayout) {
    frame.render_widget(Clear, layout.area);

    let title = if view.query.is_empty() {
        " Commands ".to_string()
    } else {
        format!(" {} ", view.query)
    };

    let block = WidgetBlock::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Gray))
        .title(title);

    let inner = block.inner(layout.area);
    frame.render_widget(block, layout.area);

    if view.rows.is_empty() {
        let style = Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC);
        let line = Line::from(vec![Span::styled("No matching commands", style)]);
        frame.render_widget(line, Rect::new(inner.x, inner.y, inner.width, 1));
        return;
    }

    for (i, m) in view.rows.iter().enumerate() {
        if i as u16 >= layout.rows.height {
            break;
        }
        let is_selected = view.selected == Some(i);
        let (label_style, desc_style) = if is_selected {
            (
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
                Style::default().fg(Color::Gray).bg(Color::Blue),
            )
        } else {
            (
                Style::default().fg(Color::Gray),
                Style::default().fg(Color::DarkGray),
            )
        };

        let mut spans = vec![
            Span::styled(format!("{} ", m.command.icon), label_style),
            Span::styled(m.command.label, label_style),
        ];
        if let Some(desc) = m.command.description {
            spans.push(Span::styled(format!("  {}", desc), desc_style));
        }
        let line = Line::from(spans).style(if is_selected {
            Style::default().bg(Color::Blue)
        } else {
            Style::default()
        });
        let line_area = Rect::new(inner.x, layout.rows.y + i as u16, inner.width, 1);
        frame.render_widget(line, line_area);
    }

    if view.hidden > 0 && layout.rows.bottom() < inner.bottom() {
        let more = Line::from(Span::styled(
            format!("+{} more", view.hidden),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM),
        ));
        frame.render_widget(more, Rect::new(inner.x, layout.rows.bottom(), inner.width, 1));
    }
}
