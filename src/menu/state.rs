use crate::filter::Match;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// Result set and selection of an open menu.
///
/// `selected` is `None` exactly when `results` is empty; otherwise it
/// always indexes into `results`.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuState {
    query: String,
    results: Vec<Match>,
    total_matches: usize,
    selected: Option<usize>,
}

impl MenuState {
    pub fn open(results: Vec<Match>) -> Self {
        let selected = if results.is_empty() { None } else { Some(0) };
        let total_matches = results.len();
        Self {
            query: String::new(),
            results,
            total_matches,
            selected,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[Match] {
        &self.results
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Matches that did not fit in `results`.
    pub fn hidden_matches(&self) -> usize {
        self.total_matches.saturating_sub(self.results.len())
    }

    pub fn selection(&self) -> Option<&Match> {
        self.selected.and_then(|i| self.results.get(i))
    }

    pub(crate) fn set_total_matches(&mut self, total_matches: usize) {
        self.total_matches = total_matches.max(self.results.len());
    }

    /// Swaps in a new result set, keeping the selection where it still fits.
    pub fn replace_results(&mut self, query: &str, results: Vec<Match>, total_matches: usize) {
        self.query = query.to_string();
        self.total_matches = total_matches.max(results.len());
        self.selected = clamp_selection(self.selected, results.len());
        self.results = results;
    }

    pub fn navigate(&mut self, direction: Direction) {
        let len = self.results.len();
        if len == 0 {
            return;
        }
        self.selected = Some(match (direction, self.selected) {
            (Direction::Next, None) => 0,
            (Direction::Next, Some(i)) => (i + 1) % len,
            (Direction::Previous, None) | (Direction::Previous, Some(0)) => len - 1,
            (Direction::Previous, Some(i)) => (i - 1).min(len - 1),
        });
    }

    /// Selects `index` directly. Returns false if it is out of range.
    pub fn hover(&mut self, index: usize) -> bool {
        if index < self.results.len() {
            self.selected = Some(index);
            true
        } else {
            false
        }
    }
}

/// Keeps `previous` when it still fits, otherwise moves to the last row.
/// With no previous selection a non-empty list starts at the top.
pub fn clamp_selection(previous: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match previous {
        Some(i) if i < len => Some(i),
        Some(_) => Some(len - 1),
        None => Some(0),
    }
}
