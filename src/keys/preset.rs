use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key means while editing or while the menu is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    Next,
    Previous,
    Commit,
    Cancel,
    Quit,
}

impl Intent {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "next" => Some(Self::Next),
            "previous" | "prev" => Some(Self::Previous),
            "commit" => Some(Self::Commit),
            "cancel" => Some(Self::Cancel),
            "quit" => Some(Self::Quit),
            _ => None,
        }
    }

    pub fn hint_text(&self) -> &'static str {
        match self {
            Self::Next => "next",
            Self::Previous => "prev",
            Self::Commit => "insert",
            Self::Cancel => "cancel",
            Self::Quit => "quit",
        }
    }
}

pub const PRESETS: [&str; 3] = ["default", "emacs", "vim"];

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::CONTROL)
}

fn shift(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::SHIFT)
}

/// Arrow keys, Enter and Escape, the way the menu popup reads them.
pub fn default_preset() -> HashMap<KeyEvent, Intent> {
    let mut m = HashMap::new();
    m.insert(key(KeyCode::Down), Intent::Next);
    m.insert(key(KeyCode::Tab), Intent::Next);
    m.insert(key(KeyCode::Up), Intent::Previous);
    m.insert(shift(KeyCode::BackTab), Intent::Previous);
    m.insert(key(KeyCode::Enter), Intent::Commit);
    m.insert(key(KeyCode::Esc), Intent::Cancel);
    m.insert(ctrl(KeyCode::Char('q')), Intent::Quit);
    m
}

pub fn emacs_preset() -> HashMap<KeyEvent, Intent> {
    let mut m = default_preset();
    m.insert(ctrl(KeyCode::Char('n')), Intent::Next);
    m.insert(ctrl(KeyCode::Char('p')), Intent::Previous);
    m.insert(ctrl(KeyCode::Char('g')), Intent::Cancel);
    m.insert(ctrl(KeyCode::Char('m')), Intent::Commit);
    m.remove(&ctrl(KeyCode::Char('q')));
    m.insert(ctrl(KeyCode::Char('x')), Intent::Quit);
    m
}

pub fn vim_preset() -> HashMap<KeyEvent, Intent> {
    let mut m = default_preset();
    m.insert(ctrl(KeyCode::Char('j')), Intent::Next);
    m.insert(ctrl(KeyCode::Char('n')), Intent::Next);
    m.insert(ctrl(KeyCode::Char('k')), Intent::Previous);
    m.insert(ctrl(KeyCode::Char('p')), Intent::Previous);
    m.insert(ctrl(KeyCode::Char('y')), Intent::Commit);
    m.insert(ctrl(KeyCode::Char('c')), Intent::Cancel);
    m
}

pub fn get_preset(name: &str) -> Option<HashMap<KeyEvent, Intent>> {
    match name.to_lowercase().as_str() {
        "default" => Some(default_preset()),
        "emacs" => Some(emacs_preset()),
        "vim" => Some(vim_preset()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has_every_intent(preset: &HashMap<KeyEvent, Intent>) {
        let intents: Vec<&Intent> = preset.values().collect();
        for intent in [
            Intent::Next,
            Intent::Previous,
            Intent::Commit,
            Intent::Cancel,
            Intent::Quit,
        ] {
            assert!(intents.contains(&&intent), "Missing {:?}", intent);
        }
    }

    #[test]
    fn every_preset_covers_every_intent() {
        for name in PRESETS {
            has_every_intent(&get_preset(name).unwrap());
        }
    }

    #[test]
    fn arrows_work_in_every_preset() {
        for name in PRESETS {
            let preset = get_preset(name).unwrap();
            assert_eq!(preset.get(&key(KeyCode::Down)), Some(&Intent::Next));
            assert_eq!(preset.get(&key(KeyCode::Up)), Some(&Intent::Previous));
            assert_eq!(preset.get(&key(KeyCode::Enter)), Some(&Intent::Commit));
        }
    }

    #[test]
    fn emacs_ctrl_n_is_next() {
        let preset = emacs_preset();
        assert_eq!(preset.get(&ctrl(KeyCode::Char('n'))), Some(&Intent::Next));
        assert_eq!(preset.get(&ctrl(KeyCode::Char('q'))), None);
    }

    #[test]
    fn vim_ctrl_k_is_previous() {
        let preset = vim_preset();
        assert_eq!(preset.get(&ctrl(KeyCode::Char('k'))), Some(&Intent::Previous));
    }

    #[test]
    fn preset_lookup_is_case_insensitive() {
        assert!(get_preset("VIM").is_some());
        assert!(get_preset("vscode").is_none());
    }

    #[test]
    fn intent_from_str() {
        assert_eq!(Intent::from_str("prev"), Some(Intent::Previous));
        assert_eq!(Intent::from_str("Commit"), Some(Intent::Commit));
        assert_eq!(Intent::from_str("nope"), None);
    }
}
