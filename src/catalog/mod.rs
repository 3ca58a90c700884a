mod recency;
mod types;

mod bullet;
mod code;
mod h1;
mod h2;
mod h3;
mod highlight;
mod hr;
mod math;
mod numbered;
mod today;
mod todo;

pub use recency::{RecencyLedger, RECENCY_CAPACITY};
pub use types::*;

/// What the menu shows before anything is typed.
pub const DEFAULT_SHORTLIST: [&str; 5] =
    ["Heading 1", "Heading 2", "To-Do", "Bullet List", "Code Block"];

pub fn builtin_commands() -> Vec<Command> {
    vec![
        h1::CMD,
        h2::CMD,
        h3::CMD,
        todo::CMD,
        bullet::CMD,
        numbered::CMD,
        code::CMD,
        math::CMD,
        highlight::CMD,
        hr::CMD,
        today::CMD,
    ]
}

/// Static command registry plus the session's usage ledger.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    commands: Vec<Command>,
    recency: RecencyLedger,
}

impl Catalog {
    pub fn new(commands: Vec<Command>) -> Self {
        Self {
            commands,
            recency: RecencyLedger::new(),
        }
    }

    pub fn builtin() -> Self {
        Self::new(builtin_commands())
    }

    /// Every command with its priority freshly derived from the ledger.
    pub fn list_commands(&self) -> Vec<Candidate<'_>> {
        self.commands
            .iter()
            .map(|command| Candidate {
                command,
                priority: self.recency_bonus(command.label),
            })
            .collect()
    }

    pub fn recency_bonus(&self, label: &str) -> u32 {
        self.recency.bonus(label)
    }

    pub fn record_usage(&mut self, label: &str) {
        self.recency.record(label);
    }

    pub fn recency(&self) -> &RecencyLedger {
        &self.recency
    }

    pub fn get(&self, label: &str) -> Option<&Command> {
        self.commands.iter().find(|c| c.label == label)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_11() {
        assert_eq!(builtin_commands().len(), 11);
    }

    #[test]
    fn builtin_unique_labels() {
        let cmds = builtin_commands();
        let labels: Vec<&str> = cmds.iter().map(|c| c.label).collect();
        let mut unique = labels.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(labels.len(), unique.len());
    }

    #[test]
    fn shortlist_labels_exist_in_builtin() {
        let catalog = Catalog::builtin();
        for label in DEFAULT_SHORTLIST {
            assert!(catalog.get(label).is_some(), "missing {}", label);
        }
    }

    #[test]
    fn list_commands_starts_without_priority() {
        let catalog = Catalog::builtin();
        assert!(catalog.list_commands().iter().all(|c| c.priority == 0));
    }

    #[test]
    fn record_usage_biases_priority() {
        let mut catalog = Catalog::builtin();
        catalog.record_usage("Code Block");
        catalog.record_usage("To-Do");
        let listed = catalog.list_commands();
        let priority = |label: &str| {
            listed
                .iter()
                .find(|c| c.command.label == label)
                .map(|c| c.priority)
                .unwrap()
        };
        assert_eq!(priority("To-Do"), 10);
        assert_eq!(priority("Code Block"), 9);
        assert_eq!(priority("Heading 1"), 0);
    }

    #[test]
    fn empty_catalog_is_tolerated() {
        let catalog = Catalog::new(Vec::new());
        assert!(catalog.is_empty());
        assert!(catalog.list_commands().is_empty());
    }

    #[test]
    fn code_block_spans_lines() {
        let catalog = Catalog::builtin();
        let code = catalog.get("Code Block").unwrap();
        assert_eq!(code.action, CommandAction::InsertText("```\n\n```"));
    }
}
