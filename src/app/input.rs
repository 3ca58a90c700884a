use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use tracing::debug;

use slash_menu::{Committed, Direction, LineSnapshot};

use super::handlers::HostHandlers;
use super::state::AppState;
use crate::error::{Notice, Result, SlashError};
use crate::keys::preset::Intent;
use crate::keys::Keymap;

// --- Key handling ---

pub fn handle_key(state: &mut AppState, key: &KeyEvent, keymap: &Keymap) {
    state.notice = None;

    if state.menu.is_open() {
        handle_menu_key(state, key, keymap);
    } else {
        handle_editor_key(state, key, keymap);
    }
}

fn handle_menu_key(state: &mut AppState, key: &KeyEvent, keymap: &Keymap) {
    if let Some(intent) = keymap.resolve(key) {
        match intent {
            Intent::Next => state.menu.navigate(Direction::Next),
            Intent::Previous => state.menu.navigate(Direction::Previous),
            Intent::Commit => {
                let result = state.menu.commit_and_resolve(&HostHandlers);
                apply_commit(state, result);
            }
            Intent::Cancel => state.menu.close(),
            Intent::Quit => state.should_quit = true,
        }
        return;
    }

    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Backspace) => {
            let mut query = state.query().to_string();
            if query.pop().is_none() {
                state.menu.close();
            } else {
                state.menu.set_query(&query);
            }
        }
        (KeyModifiers::NONE, KeyCode::Char(c)) | (KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            let mut query = state.query().to_string();
            query.push(c);
            state.menu.set_query(&query);
        }
        _ => {}
    }
}

fn handle_editor_key(state: &mut AppState, key: &KeyEvent, keymap: &Keymap) {
    if keymap.resolve(key) == Some(Intent::Quit) {
        state.should_quit = true;
        return;
    }

    let buf = &mut state.buffer;
    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Char(c)) | (KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            buf.insert_char(c);
            if c == state.menu.trigger() {
                let snapshot = LineSnapshot::new(buf.current_line(), buf.line_column());
                state.menu.open(snapshot);
            }
        }
        (KeyModifiers::NONE, KeyCode::Enter) => buf.insert_char('\n'),
        (KeyModifiers::NONE, KeyCode::Backspace) => buf.delete_back(),
        (KeyModifiers::NONE, KeyCode::Delete) => buf.delete_forward(),
        (KeyModifiers::NONE, KeyCode::Left) => buf.move_left(),
        (KeyModifiers::NONE, KeyCode::Right) => buf.move_right(),
        (KeyModifiers::NONE, KeyCode::Up) => buf.move_up(),
        (KeyModifiers::NONE, KeyCode::Down) => buf.move_down(),
        (KeyModifiers::NONE, KeyCode::Home) => buf.move_home(),
        (KeyModifiers::NONE, KeyCode::End) => buf.move_end(),
        _ => {}
    }
}

/// Applies a commit to the buffer, or turns its failure into a notice.
fn apply_commit(state: &mut AppState, result: Result<Committed>) {
    match result {
        Ok(committed) => {
            let spec = &committed.insertion;
            state
                .buffer
                .replace_current_line(&spec.new_line_text, spec.new_cursor_offset);
            state.notice = Some(Notice::inserted(committed.label));
        }
        Err(e) => {
            if !matches!(e, SlashError::NoSelection) {
                debug!(error = %e, "commit left the buffer unchanged");
            }
            state.notice = Some(Notice::from_error(&e));
        }
    }
}

// --- Mouse handling ---

pub fn handle_mouse(state: &mut AppState, mouse: &MouseEvent) {
    if !state.menu.is_open() || !state.menu.settings().enable_mouse {
        return;
    }
    let Some(layout) = crate::ui::popup_layout(state.viewport, state) else {
        return;
    };

    match mouse.kind {
        MouseEventKind::Moved => {
            if let Some(index) = layout.row_at(mouse.column, mouse.row) {
                state.menu.hover(index);
            }
        }
        MouseEventKind::Down(MouseButton::Left) => {
            match layout.row_at(mouse.column, mouse.row) {
                Some(index) => {
                    state.notice = None;
                    if let Some(result) = state.menu.click(index, &HostHandlers) {
                        apply_commit(state, result);
                    }
                }
                None if !layout.area.contains((mouse.column, mouse.row).into()) => {
                    state.menu.close();
                }
                None => {}
            }
        }
        _ => {}
    }
}
