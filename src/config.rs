use std::collections::HashMap;
use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlashError};
use crate::keys::preset::{get_preset, PRESETS};
use slash_menu::MenuSettings;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub menu: MenuSettings,
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct KeybindingsConfig {
    #[serde(default = "default_preset")]
    pub preset: String,
    #[serde(default)]
    pub bindings: HashMap<String, String>,
}

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            preset: default_preset(),
            bindings: HashMap::new(),
        }
    }
}

fn default_preset() -> String {
    "default".into()
}

impl AppConfig {
    pub fn load_from_path(config_path: &Path) -> Result<Self> {
        let config: AppConfig = Figment::new()
            .merge(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file(config_path))
            .merge(Env::prefixed("SLASH_").split("__"))
            .extract()
            .map_err(|e| SlashError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.menu.validate()?;
        if get_preset(&self.keybindings.preset).is_none() {
            return Err(SlashError::Config(format!(
                "keybindings.preset must be one of {} (got {})",
                PRESETS.join(" | "),
                self.keybindings.preset
            )));
        }
        Ok(())
    }

    pub fn config_dir() -> Option<PathBuf> {
        std::env::var("XDG_CONFIG_HOME")
            .ok()
            .map(|xdg| PathBuf::from(xdg).join("slash-menu"))
            .or_else(|| {
                directories::BaseDirs::new()
                    .map(|dirs| dirs.home_dir().join(".config").join("slash-menu"))
            })
    }

    pub fn log_dir() -> PathBuf {
        directories::ProjectDirs::from("", "", "slash-menu")
            .map(|dirs| dirs.data_local_dir().join("logs"))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn write_default(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let body = toml::to_string_pretty(&AppConfig::default())?;
        let content = format!(
            "# slash-menu configuration\n\
             # max_menu_items: 3..=10, keybindings.preset: {}\n\
             # Override single intents (next, previous, commit, cancel, quit):\n\
             # [keybindings.bindings]\n\
             # next = \"Ctrl+n\"\n\n{}",
            PRESETS.join(" | "),
            body
        );

        std::fs::write(path, content)?;
        Ok(())
    }
}
