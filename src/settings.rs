use serde::{Deserialize, Serialize};

use crate::error::{Result, SlashError};

pub const MIN_MENU_ITEMS: usize = 3;
pub const MAX_MENU_ITEMS: usize = 10;

/// Host-supplied options recognized by the menu core.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct MenuSettings {
    #[serde(default = "default_max_menu_items")]
    pub max_menu_items: usize,
    #[serde(default = "default_enable_mouse")]
    pub enable_mouse: bool,
    /// Verbose diagnostics only; never changes behavior.
    #[serde(default = "default_debug_mode")]
    pub debug_mode: bool,
    #[serde(default = "default_trigger")]
    pub trigger: char,
}

impl Default for MenuSettings {
    fn default() -> Self {
        Self {
            max_menu_items: default_max_menu_items(),
            enable_mouse: default_enable_mouse(),
            debug_mode: default_debug_mode(),
            trigger: default_trigger(),
        }
    }
}

fn default_max_menu_items() -> usize {
    5
}

fn default_enable_mouse() -> bool {
    true
}

fn default_debug_mode() -> bool {
    true
}

fn default_trigger() -> char {
    '/'
}

impl MenuSettings {
    pub fn validate(&self) -> Result<()> {
        if !(MIN_MENU_ITEMS..=MAX_MENU_ITEMS).contains(&self.max_menu_items) {
            return Err(SlashError::Config(format!(
                "menu.max_menu_items must be between {} and {} (got {})",
                MIN_MENU_ITEMS, MAX_MENU_ITEMS, self.max_menu_items
            )));
        }
        if self.trigger.is_whitespace() || self.trigger.is_alphanumeric() {
            return Err(SlashError::Config(format!(
                "menu.trigger must be a punctuation character (got {:?})",
                self.trigger
            )));
        }
        Ok(())
    }
}
