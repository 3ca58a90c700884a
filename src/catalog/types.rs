/// A catalog entry. Defined once when the catalog is built, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub label: &'static str,
    pub action: CommandAction,
    pub description: Option<&'static str>,
    pub synonyms: &'static [&'static str],
    pub icon: &'static str,
}

/// What committing a command does. Handlers are looked up by the host
/// through `id`, so the core never carries executable payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandAction {
    InsertText(&'static str),
    CustomHandler(&'static str),
}

/// A command paired with its recency priority for the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    pub command: &'a Command,
    pub priority: u32,
}
