use super::types::{Command, CommandAction};

pub(super) const CMD: Command = Command {
    label: "To-Do",
    action: CommandAction::InsertText("- [ ] "),
    description: Some("Task checkbox"),
    synonyms: &["todo", "task", "checkbox", "check", "t", "tick"],
    icon: "☑️",
};
