pub mod catalog;
pub mod error;
pub mod filter;
pub mod insert;
pub mod menu;
pub mod settings;

// Convenience re-exports
pub use catalog::{Catalog, Command, CommandAction};
pub use error::{Notice, Result, SlashError};
pub use filter::{filter, Match};
pub use insert::{resolve, InsertionSpec};
pub use menu::{Committed, Direction, HandlerTable, LineSnapshot, MenuView, SlashMenu};
pub use settings::MenuSettings;
