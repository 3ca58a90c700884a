use super::types::{Command, CommandAction};

pub(super) const CMD: Command = Command {
    label: "Math Block",
    action: CommandAction::InsertText("$$\n\n$$"),
    description: Some("LaTeX math formula"),
    synonyms: &["math", "latex", "formula", "equation", "m", "$$"],
    icon: "🧮",
};
