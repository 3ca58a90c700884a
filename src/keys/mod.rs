pub mod parser;
pub mod preset;

use std::collections::HashMap;

use crossterm::event::KeyEvent;

use crate::error::{Result, SlashError};
use preset::{get_preset, Intent};

pub struct Keymap {
    bindings: HashMap<KeyEvent, Intent>,
}

impl Keymap {
    pub fn from_preset(name: &str, overrides: &HashMap<String, String>) -> Result<Self> {
        let mut bindings = get_preset(name)
            .ok_or_else(|| SlashError::Config(format!("Unknown keybinding preset: {}", name)))?;

        for (intent_name, key_str) in overrides {
            let intent = Intent::from_str(intent_name)
                .ok_or_else(|| SlashError::Config(format!("Unknown intent: {}", intent_name)))?;
            let key_event = parser::parse_key(key_str)?;

            bindings.retain(|_, v| v != &intent);
            bindings.insert(key_event, intent);
        }

        Ok(Self { bindings })
    }

    pub fn resolve(&self, key: &KeyEvent) -> Option<Intent> {
        self.bindings.get(key).copied()
    }

    /// One binding per intent for the status bar, in a stable order.
    pub fn hints(&self) -> Vec<(String, &'static str)> {
        let shown = [
            Intent::Next,
            Intent::Previous,
            Intent::Commit,
            Intent::Cancel,
            Intent::Quit,
        ];

        let mut hints = Vec::new();
        for intent in &shown {
            let mut keys: Vec<String> = self
                .bindings
                .iter()
                .filter(|(_, i)| *i == intent)
                .map(|(k, _)| format_key_event(k))
                .collect();
            keys.sort_by_key(|k| (k.chars().count(), k.clone()));
            if let Some(first) = keys.into_iter().next() {
                hints.push((first, intent.hint_text()));
            }
        }
        hints
    }
}

fn format_key_event(key: &KeyEvent) -> String {
    use crossterm::event::{KeyCode, KeyModifiers};

    let mut parts = Vec::new();

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl".to_string());
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt".to_string());
    }
    if key.modifiers.contains(KeyModifiers::SHIFT) && key.code != KeyCode::BackTab {
        parts.push("Shift".to_string());
    }

    let key_str = match key.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "Shift+Tab".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        _ => "?".to_string(),
    };
    parts.push(key_str);

    parts.join("+")
}
