use super::types::{Command, CommandAction};

pub(super) const CMD: Command = Command {
    label: "Heading 3",
    action: CommandAction::InsertText("### "),
    description: Some("Insert small header"),
    synonyms: &["h3", "header", "heading3", "head", "small"],
    icon: "📄",
};
