use super::types::{Command, CommandAction};

pub(super) const CMD: Command = Command {
    label: "Horizontal Line",
    action: CommandAction::InsertText("\n---\n"),
    description: Some("Horizontal separator"),
    synonyms: &["hr", "line", "separator", "divider", "horizontal", "---"],
    icon: "➖",
};
