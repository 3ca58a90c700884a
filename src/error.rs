use thiserror::Error;

#[derive(Debug, Error)]
pub enum SlashError {
    #[error("no valid selection")]
    NoSelection,
    #[error("trigger '{trigger}' not found before the cursor")]
    TriggerNotFound { trigger: char },
    #[error("no handler registered for '{0}'")]
    UnknownHandler(String),
    #[error("Config error: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, SlashError>;

/// Ready-to-render, non-fatal notice for the host to show.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub title: String,
    pub message: String,
    pub hint: String,
}

impl Notice {
    pub fn from_error(e: &SlashError) -> Self {
        match e {
            SlashError::NoSelection => Self {
                title: "Nothing Selected".into(),
                message: "No valid selection".into(),
                hint: "Use the arrow keys to pick a command".into(),
            },
            SlashError::TriggerNotFound { trigger } => Self {
                title: "Insert Skipped".into(),
                message: format!("The '{}' that opened the menu is gone", trigger),
                hint: "The line changed while the menu was open".into(),
            },
            SlashError::UnknownHandler(id) => Self {
                title: "Insert Skipped".into(),
                message: format!("No handler for '{}'", id),
                hint: "The host does not provide this command".into(),
            },
            SlashError::Config(msg) => Self {
                title: "Config Error".into(),
                message: truncate(msg, 80),
                hint: "Check your config.toml".into(),
            },
            other => Self {
                title: "Error".into(),
                message: truncate(&other.to_string(), 80),
                hint: "Try again".into(),
            },
        }
    }

    pub fn inserted(label: &str) -> Self {
        Self {
            title: "Inserted".into(),
            message: format!("{} inserted", label),
            hint: String::new(),
        }
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}
