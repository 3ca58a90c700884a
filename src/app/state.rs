use ratatui::layout::Rect;

use crate::edit_buffer::EditBuffer;
use crate::error::Notice;
use slash_menu::SlashMenu;

pub struct AppState {
    pub buffer: EditBuffer,
    pub menu: SlashMenu,
    pub notice: Option<Notice>,
    pub hints: Vec<(String, &'static str)>,
    pub should_quit: bool,
    /// Terminal area of the last frame, used to hit-test mouse events.
    pub viewport: Rect,
}

impl AppState {
    pub fn new(menu: SlashMenu, hints: Vec<(String, &'static str)>) -> Self {
        Self {
            buffer: EditBuffer::new_empty(),
            menu,
            notice: None,
            hints,
            should_quit: false,
            viewport: Rect::new(0, 0, 80, 24),
        }
    }

    pub fn query(&self) -> &str {
        self.menu.view().map(|v| v.query).unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppMessage {
    Key(crossterm::event::KeyEvent),
    Mouse(crossterm::event::MouseEvent),
    Resize,
}
