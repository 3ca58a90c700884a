use super::types::{Command, CommandAction};

pub(super) const CMD: Command = Command {
    label: "Code Block",
    action: CommandAction::InsertText("```\n\n```"),
    description: Some("Code snippet"),
    synonyms: &["code", "snippet", "programming", "c", "prog", "```"],
    icon: "💻",
};
