use super::types::{Command, CommandAction};

pub(super) const CMD: Command = Command {
    label: "Highlight",
    action: CommandAction::InsertText("=="),
    description: Some("Highlight text"),
    synonyms: &["highlight", "mark", "yellow", "hl", "=="],
    icon: "🌟",
};
