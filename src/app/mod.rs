mod handlers;
mod input;
mod state;
pub use state::*;

use input::{handle_key, handle_mouse};

use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::layout::Rect;
use ratatui::DefaultTerminal;
use tokio::sync::mpsc;
use tracing::info;

use crate::config::AppConfig;
use crate::error::Result;
use crate::keys::Keymap;
use slash_menu::{Catalog, SlashMenu};

pub async fn run(config: &AppConfig, terminal: &mut DefaultTerminal) -> Result<()> {
    let keymap = Keymap::from_preset(&config.keybindings.preset, &config.keybindings.bindings)?;

    let menu = SlashMenu::new(Catalog::builtin(), config.menu.clone());
    let mut state = AppState::new(menu, keymap.hints());

    let (tx, mut rx) = mpsc::unbounded_channel::<AppMessage>();

    info!(
        preset = %config.keybindings.preset,
        trigger = %config.menu.trigger,
        "editor started"
    );

    // Spawn event reader task
    let event_tx = tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            let msg = match reader.next().await {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    AppMessage::Key(key)
                }
                Some(Ok(Event::Mouse(mouse))) => AppMessage::Mouse(mouse),
                Some(Ok(Event::Resize(_, _))) => AppMessage::Resize,
                Some(Err(_)) | None => break,
                _ => continue,
            };
            if event_tx.send(msg).is_err() {
                break;
            }
        }
    });

    // Main loop
    loop {
        let size = terminal.size()?;
        state.viewport = Rect::new(0, 0, size.width, size.height);
        terminal.draw(|frame| crate::ui::render(frame, &state))?;

        match rx.recv().await {
            Some(AppMessage::Key(key)) => handle_key(&mut state, &key, &keymap),
            Some(AppMessage::Mouse(mouse)) => handle_mouse(&mut state, &mouse),
            Some(AppMessage::Resize) => {}
            None => break,
        }

        if state.should_quit {
            break;
        }
    }

    info!("editor stopped");
    Ok(())
}
