mod state;

pub use state::{clamp_selection, Direction, MenuState};

use tracing::{debug, warn};

use crate::catalog::{Catalog, Command, CommandAction};
use crate::error::{Result, SlashError};
use crate::filter::{filter, match_count, Match};
use crate::insert::{resolve, InsertionSpec};
use crate::settings::MenuSettings;

/// Line text and cursor column captured when the menu opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineSnapshot {
    pub line: String,
    pub cursor_column: usize,
}

impl LineSnapshot {
    pub fn new(line: impl Into<String>, cursor_column: usize) -> Self {
        Self {
            line: line.into(),
            cursor_column,
        }
    }
}

/// The committed command and the snapshot it must be resolved against.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub command: Command,
    pub snapshot: LineSnapshot,
}

/// A commit turned into a buffer edit.
#[derive(Debug, Clone, PartialEq)]
pub struct Committed {
    pub label: &'static str,
    pub insertion: InsertionSpec,
}

/// Host-side lookup for `CommandAction::CustomHandler` ids.
pub trait HandlerTable {
    /// Text to insert for `id`, or `None` if the host does not know it.
    fn insert_text(&self, id: &str) -> Option<String>;
}

/// Table with no handlers; every custom command is unknown.
pub struct NoHandlers;

impl HandlerTable for NoHandlers {
    fn insert_text(&self, _id: &str) -> Option<String> {
        None
    }
}

/// What the host renders after every change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuView<'a> {
    pub query: &'a str,
    pub rows: &'a [Match],
    pub selected: Option<usize>,
    pub hidden: usize,
}

#[derive(Debug, Clone)]
struct OpenMenu {
    state: MenuState,
    snapshot: LineSnapshot,
}

/// Owns the catalog and the single live menu instance.
#[derive(Debug, Clone)]
pub struct SlashMenu {
    catalog: Catalog,
    settings: MenuSettings,
    open: Option<OpenMenu>,
}

impl SlashMenu {
    pub fn new(catalog: Catalog, settings: MenuSettings) -> Self {
        Self {
            catalog,
            settings,
            open: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn settings(&self) -> &MenuSettings {
        &self.settings
    }

    pub fn trigger(&self) -> char {
        self.settings.trigger
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn state(&self) -> Option<&MenuState> {
        self.open.as_ref().map(|m| &m.state)
    }

    pub fn snapshot(&self) -> Option<&LineSnapshot> {
        self.open.as_ref().map(|m| &m.snapshot)
    }

    pub fn view(&self) -> Option<MenuView<'_>> {
        self.state().map(|s| MenuView {
            query: s.query(),
            rows: s.results(),
            selected: s.selected(),
            hidden: s.hidden_matches(),
        })
    }

    /// Opens with the default view. A menu that is already open is torn
    /// down first.
    pub fn open(&mut self, snapshot: LineSnapshot) {
        if self.open.is_some() {
            self.close();
        }
        let candidates = self.catalog.list_commands();
        let results = filter(&candidates, "", self.settings.max_menu_items);
        let total = match_count(&candidates, "");
        let mut state = MenuState::open(results);
        state.set_total_matches(total);
        if self.settings.debug_mode {
            debug!(
                line = %snapshot.line,
                column = snapshot.cursor_column,
                results = state.results().len(),
                "slash menu opened"
            );
        }
        self.open = Some(OpenMenu { state, snapshot });
    }

    pub fn set_query(&mut self, query: &str) {
        let Some(menu) = &mut self.open else {
            return;
        };
        let candidates = self.catalog.list_commands();
        let results = filter(&candidates, query, self.settings.max_menu_items);
        let total = match_count(&candidates, query);
        menu.state.replace_results(query, results, total);
        if self.settings.debug_mode {
            debug!(
                query,
                results = menu.state.results().len(),
                selected = ?menu.state.selected(),
                "slash menu filtered"
            );
        }
    }

    pub fn navigate(&mut self, direction: Direction) {
        if let Some(menu) = &mut self.open {
            menu.state.navigate(direction);
            if self.settings.debug_mode {
                debug!(?direction, selected = ?menu.state.selected(), "slash menu navigated");
            }
        }
    }

    /// Mouse hover. No effect when mouse support is off.
    pub fn hover(&mut self, index: usize) {
        if !self.settings.enable_mouse {
            return;
        }
        if let Some(menu) = &mut self.open {
            let accepted = menu.state.hover(index);
            if self.settings.debug_mode && !accepted {
                debug!(index, "slash menu hover out of range");
            }
        }
    }

    /// Takes the selected command and closes the menu. With no valid
    /// selection the menu stays open and untouched.
    pub fn commit(&mut self) -> Result<Selection> {
        let command = self
            .open
            .as_ref()
            .and_then(|m| m.state.selection())
            .map(|m| m.command.clone())
            .ok_or(SlashError::NoSelection)?;

        let Some(menu) = self.open.take() else {
            return Err(SlashError::NoSelection);
        };
        self.catalog.record_usage(command.label);
        if self.settings.debug_mode {
            debug!(label = command.label, "slash menu committed");
        }
        Ok(Selection {
            command,
            snapshot: menu.snapshot,
        })
    }

    /// Commits and resolves the selection into an edit of the snapshot line.
    pub fn commit_and_resolve(&mut self, handlers: &dyn HandlerTable) -> Result<Committed> {
        let selection = self.commit()?;
        let text = match selection.command.action {
            CommandAction::InsertText(text) => text.to_string(),
            CommandAction::CustomHandler(id) => handlers
                .insert_text(id)
                .ok_or_else(|| SlashError::UnknownHandler(id.to_string()))?,
        };
        let insertion = resolve(
            &selection.snapshot.line,
            selection.snapshot.cursor_column,
            &text,
            self.settings.trigger,
        )
        .inspect_err(|e| {
            warn!(label = selection.command.label, error = %e, "slash insert skipped");
        })?;
        Ok(Committed {
            label: selection.command.label,
            insertion,
        })
    }

    /// Mouse click: hover the row, then commit it. A click that misses
    /// every row commits nothing and leaves the menu open.
    pub fn click(&mut self, index: usize, handlers: &dyn HandlerTable) -> Option<Result<Committed>> {
        if !self.settings.enable_mouse {
            return None;
        }
        let menu = self.open.as_mut()?;
        if !menu.state.hover(index) {
            if self.settings.debug_mode {
                debug!(index, "slash menu click out of range");
            }
            return None;
        }
        Some(self.commit_and_resolve(handlers))
    }

    pub fn close(&mut self) {
        if self.open.take().is_some() && self.settings.debug_mode {
            debug!("slash menu closed");
        }
    }
}
