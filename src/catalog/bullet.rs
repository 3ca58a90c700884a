use super::types::{Command, CommandAction};

pub(super) const CMD: Command = Command {
    label: "Bullet List",
    action: CommandAction::InsertText("- "),
    description: Some("Unordered list"),
    synonyms: &["list", "bullet", "ul", "unordered", "dash", "-"],
    icon: "🔹",
};
