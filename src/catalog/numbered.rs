use super::types::{Command, CommandAction};

pub(super) const CMD: Command = Command {
    label: "Numbered List",
    action: CommandAction::InsertText("1. "),
    description: Some("Ordered list"),
    synonyms: &["numbered", "ordered", "ol", "list", "number", "1"],
    icon: "🔢",
};
