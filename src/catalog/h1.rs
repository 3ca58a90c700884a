use super::types::{Command, CommandAction};

pub(super) const CMD: Command = Command {
    label: "Heading 1",
    action: CommandAction::InsertText("# "),
    description: Some("Insert large header"),
    synonyms: &["h1", "header", "title", "heading1", "head", "large"],
    icon: "📰",
};
