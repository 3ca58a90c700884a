use std::collections::VecDeque;

pub const RECENCY_CAPACITY: usize = 10;

/// Most-recently committed labels, most recent first, no duplicates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecencyLedger {
    labels: VecDeque<String>,
}

impl RecencyLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, label: &str) {
        self.labels.retain(|l| l != label);
        self.labels.push_front(label.to_string());
        self.labels.truncate(RECENCY_CAPACITY);
    }

    /// 10 for the most recent label down to 1 for the tenth, 0 if absent.
    pub fn bonus(&self, label: &str) -> u32 {
        self.labels
            .iter()
            .position(|l| l == label)
            .map(|idx| (RECENCY_CAPACITY - idx) as u32)
            .unwrap_or(0)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_label_has_no_bonus() {
        let ledger = RecencyLedger::new();
        assert_eq!(ledger.bonus("To-Do"), 0);
    }

    #[test]
    fn most_recent_gets_ten() {
        let mut ledger = RecencyLedger::new();
        ledger.record("Heading 1");
        ledger.record("To-Do");
        assert_eq!(ledger.bonus("To-Do"), 10);
        assert_eq!(ledger.bonus("Heading 1"), 9);
    }

    #[test]
    fn rerecording_moves_to_front_without_duplicate() {
        let mut ledger = RecencyLedger::new();
        ledger.record("A");
        ledger.record("B");
        ledger.record("A");
        let labels: Vec<&str> = ledger.labels().collect();
        assert_eq!(labels, vec!["A", "B"]);
    }

    #[test]
    fn truncates_to_capacity() {
        let mut ledger = RecencyLedger::new();
        for i in 0..15 {
            ledger.record(&format!("cmd{}", i));
        }
        assert_eq!(ledger.len(), RECENCY_CAPACITY);
        assert_eq!(ledger.bonus("cmd14"), 10);
        assert_eq!(ledger.bonus("cmd5"), 1);
        assert_eq!(ledger.bonus("cmd4"), 0);
    }
}
