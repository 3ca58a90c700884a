// Re-export the library error module so binary-internal modules can use crate::error::
pub(crate) use slash_menu::error;

mod app;
mod config;
mod edit_buffer;
mod keys;
mod ui;

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use config::AppConfig;

fn config_path() -> PathBuf {
    AppConfig::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("config.toml")
}

/// Logs go to a daily file; stdout belongs to the terminal UI.
fn init_logging(config: &AppConfig) -> WorkerGuard {
    let default_level = if config.menu.debug_mode { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("slash_menu={}", default_level))
    });

    let appender = tracing_appender::rolling::daily(AppConfig::log_dir(), "slash-menu.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    guard
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = config_path();

    if !path.exists() {
        AppConfig::write_default(&path)?;
        eprintln!(
            "Created default config at: {}\nReview the menu settings and keybindings, then run again.",
            path.display()
        );
        return Ok(());
    }

    let config = match AppConfig::load_from_path(&path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config from {}: {}", path.display(), e);
            eprintln!("Fix the config file or delete it to regenerate defaults.");
            return Ok(());
        }
    };

    let _log_guard = init_logging(&config);

    let mut terminal = ratatui::init();
    let mouse = config.menu.enable_mouse;

    // Enable enhanced keyboard protocol (reports Cmd/Super on supported terminals)
    let _ = crossterm::execute!(
        std::io::stdout(),
        crossterm::event::PushKeyboardEnhancementFlags(
            crossterm::event::KeyboardEnhancementFlags::REPORT_ALL_KEYS_AS_ESCAPE_CODES
        )
    );
    if mouse {
        let _ = crossterm::execute!(std::io::stdout(), crossterm::event::EnableMouseCapture);
    }

    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal(mouse);
        hook(info);
    }));

    let result = app::run(&config, &mut terminal).await;

    restore_terminal(mouse);

    if let Err(e) = result {
        tracing::error!(error = %e, "editor exited with an error");
        eprintln!("Error: {}", e);
    }

    Ok(())
}

fn restore_terminal(mouse: bool) {
    if mouse {
        let _ = crossterm::execute!(std::io::stdout(), crossterm::event::DisableMouseCapture);
    }
    let _ = crossterm::execute!(
        std::io::stdout(),
        crossterm::event::PopKeyboardEnhancementFlags
    );
    ratatui::restore();
}
