use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::error::{Result, SlashError};

/// Parses bindings such as `Ctrl+n`, `Shift+Tab` or `Down`.
pub fn parse_key(input: &str) -> Result<KeyEvent> {
    let mut parts: Vec<&str> = input.split('+').map(str::trim).collect();
    let key_str = parts
        .pop()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| SlashError::Config(format!("No key code found in '{}'", input)))?;

    let mut modifiers = KeyModifiers::NONE;
    for part in parts {
        modifiers |= parse_modifier(part).ok_or_else(|| {
            SlashError::Config(format!("Unknown modifier '{}' in key '{}'", part, input))
        })?;
    }

    Ok(KeyEvent::new(parse_key_code(key_str)?, modifiers))
}

fn parse_modifier(s: &str) -> Option<KeyModifiers> {
    match s.to_lowercase().as_str() {
        "ctrl" | "control" => Some(KeyModifiers::CONTROL),
        "shift" => Some(KeyModifiers::SHIFT),
        "alt" | "meta" => Some(KeyModifiers::ALT),
        _ => None,
    }
}

fn parse_key_code(s: &str) -> Result<KeyCode> {
    let code = match s.to_lowercase().as_str() {
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "backspace" | "bs" => KeyCode::Backspace,
        "up" | "↑" => KeyCode::Up,
        "down" | "↓" => KeyCode::Down,
        "left" | "←" => KeyCode::Left,
        "right" | "→" => KeyCode::Right,
        "pageup" | "pgup" => KeyCode::PageUp,
        "pagedown" | "pgdn" => KeyCode::PageDown,
        "space" => KeyCode::Char(' '),
        lower => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => KeyCode::Char(ch),
                _ if lower.starts_with('f') => parse_function_key(&lower[1..])?,
                _ => return Err(SlashError::Config(format!("Unknown key: {}", s))),
            }
        }
    };
    Ok(code)
}

fn parse_function_key(num: &str) -> Result<KeyCode> {
    match num.parse::<u8>() {
        Ok(n) if (1..=12).contains(&n) => Ok(KeyCode::F(n)),
        _ => Err(SlashError::Config(format!("Invalid function key: F{}", num))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_char() {
        let key = parse_key("j").unwrap();
        assert_eq!(key.code, KeyCode::Char('j'));
        assert_eq!(key.modifiers, KeyModifiers::NONE);
    }

    #[test]
    fn parse_ctrl_modifier() {
        let key = parse_key("Ctrl+n").unwrap();
        assert_eq!(key.code, KeyCode::Char('n'));
        assert_eq!(key.modifiers, KeyModifiers::CONTROL);
    }

    #[test]
    fn parse_shift_tab() {
        let key = parse_key("Shift+Tab").unwrap();
        assert_eq!(key.code, KeyCode::Tab);
        assert_eq!(key.modifiers, KeyModifiers::SHIFT);
    }

    #[test]
    fn parse_combined_modifiers_case_insensitive() {
        let key = parse_key("ctrl+ALT+k").unwrap();
        assert_eq!(key.code, KeyCode::Char('k'));
        assert_eq!(key.modifiers, KeyModifiers::CONTROL | KeyModifiers::ALT);
    }

    #[test]
    fn parse_named_keys() {
        assert_eq!(parse_key("Enter").unwrap().code, KeyCode::Enter);
        assert_eq!(parse_key("Esc").unwrap().code, KeyCode::Esc);
        assert_eq!(parse_key("Down").unwrap().code, KeyCode::Down);
        assert_eq!(parse_key("↑").unwrap().code, KeyCode::Up);
        assert_eq!(parse_key("Space").unwrap().code, KeyCode::Char(' '));
        assert_eq!(parse_key("F12").unwrap().code, KeyCode::F(12));
    }

    #[test]
    fn parse_single_f_is_a_char() {
        assert_eq!(parse_key("f").unwrap().code, KeyCode::Char('f'));
    }

    #[test]
    fn parse_invalid_key_returns_error() {
        assert!(parse_key("").is_err());
        assert!(parse_key("Ctrl+").is_err());
        assert!(parse_key("F13").is_err());
        assert!(parse_key("Hyper+x").is_err());
        assert!(parse_key("nonsense").is_err());
    }
}
