use super::types::{Command, CommandAction};

pub(super) const CMD: Command = Command {
    label: "Today",
    action: CommandAction::CustomHandler("date.today"),
    description: Some("Link to today's daily note"),
    synonyms: &["date", "day", "daily", "now"],
    icon: "📅",
};
