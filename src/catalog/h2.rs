use super::types::{Command, CommandAction};

pub(super) const CMD: Command = Command {
    label: "Heading 2",
    action: CommandAction::InsertText("## "),
    description: Some("Insert medium header"),
    synonyms: &["h2", "header", "subtitle", "heading2", "head", "medium"],
    icon: "📋",
};
