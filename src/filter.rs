use std::cmp::Ordering;

use crate::catalog::{Candidate, Command, DEFAULT_SHORTLIST};

pub const DEFAULT_MAX_RESULTS: usize = 5;

pub const SCORE_EXACT: u32 = 100;
pub const SCORE_PREFIX: u32 = 50;
pub const SCORE_CONTAINS: u32 = 25;
pub const SCORE_SYNONYM: u32 = 15;
pub const SCORE_DESCRIPTION: u32 = 5;

/// A command with the relevance score it earned for one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub command: Command,
    pub score: u32,
}

/// Ranks `candidates` against `query` and returns at most `max_results`.
///
/// An empty (or whitespace-only) query yields the curated shortlist in
/// catalog order. Otherwise each candidate lands in exactly one score band;
/// ties fall back to recency priority, then to the label.
pub fn filter(candidates: &[Candidate<'_>], query: &str, max_results: usize) -> Vec<Match> {
    let q = query.trim().to_lowercase();

    if q.is_empty() {
        return candidates
            .iter()
            .filter(|c| DEFAULT_SHORTLIST.contains(&c.command.label))
            .take(max_results)
            .map(|c| Match {
                command: c.command.clone(),
                score: 0,
            })
            .collect();
    }

    let mut scored: Vec<(&Candidate<'_>, u32)> = candidates
        .iter()
        .filter_map(|c| score(c.command, &q).map(|s| (c, s)))
        .collect();

    scored.sort_by(|(a, sa), (b, sb)| {
        sb.cmp(sa)
            .then_with(|| b.priority.cmp(&a.priority))
            .then_with(|| compare_labels(a.command.label, b.command.label))
    });

    scored
        .into_iter()
        .take(max_results)
        .map(|(c, score)| Match {
            command: c.command.clone(),
            score,
        })
        .collect()
}

/// How many candidates `filter` would return without the size cap.
pub fn match_count(candidates: &[Candidate<'_>], query: &str) -> usize {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return candidates
            .iter()
            .filter(|c| DEFAULT_SHORTLIST.contains(&c.command.label))
            .count();
    }
    candidates
        .iter()
        .filter(|c| score(c.command, &q).is_some())
        .count()
}

/// Score band for a lowercased, non-empty query, or `None` if nothing matches.
pub fn score(command: &Command, query: &str) -> Option<u32> {
    let label = command.label.to_lowercase();

    if label == query {
        return Some(SCORE_EXACT);
    }
    if label.starts_with(query) {
        return Some(SCORE_PREFIX);
    }
    if label.contains(query) {
        return Some(SCORE_CONTAINS);
    }
    if command
        .synonyms
        .iter()
        .any(|s| s.to_lowercase().contains(query))
    {
        return Some(SCORE_SYNONYM);
    }
    if command
        .description
        .is_some_and(|d| d.to_lowercase().contains(query))
    {
        return Some(SCORE_DESCRIPTION);
    }
    None
}

fn compare_labels(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, CommandAction};

    fn labels(results: &[Match]) -> Vec<&'static str> {
        results.iter().map(|m| m.command.label).collect()
    }

    fn run(catalog: &Catalog, query: &str) -> Vec<Match> {
        filter(&catalog.list_commands(), query, DEFAULT_MAX_RESULTS)
    }

    const fn plain(label: &'static str, description: &'static str) -> Command {
        Command {
            label,
            action: CommandAction::InsertText(""),
            description: Some(description),
            synonyms: &[],
            icon: "",
        }
    }

    #[test]
    fn empty_query_returns_shortlist_in_catalog_order() {
        let catalog = Catalog::builtin();
        let results = run(&catalog, "");
        assert_eq!(
            labels(&results),
            vec!["Heading 1", "Heading 2", "To-Do", "Bullet List", "Code Block"]
        );
        assert!(results.iter().all(|m| m.score == 0));
    }

    #[test]
    fn empty_query_ignores_catalog_order_of_non_shortlist() {
        let mut cmds = crate::catalog::builtin_commands();
        cmds.reverse();
        let catalog = Catalog::new(cmds);
        let results = run(&catalog, "");
        assert_eq!(
            labels(&results),
            vec!["Code Block", "Bullet List", "To-Do", "Heading 2", "Heading 1"]
        );
    }

    #[test]
    fn empty_query_caps_at_max_results() {
        let catalog = Catalog::builtin();
        let results = filter(&catalog.list_commands(), "", 3);
        assert_eq!(labels(&results), vec!["Heading 1", "Heading 2", "To-Do"]);
    }

    #[test]
    fn whitespace_query_is_default_view() {
        let catalog = Catalog::builtin();
        assert_eq!(run(&catalog, "   "), run(&catalog, ""));
    }

    #[test]
    fn head_orders_headings_alphabetically() {
        let catalog = Catalog::builtin();
        let results = run(&catalog, "head");
        assert_eq!(labels(&results), vec!["Heading 1", "Heading 2", "Heading 3"]);
        assert!(results.iter().all(|m| m.score == SCORE_PREFIX));
    }

    #[test]
    fn exact_match_dominates() {
        let catalog = Catalog::builtin();
        let results = run(&catalog, "To-Do");
        assert_eq!(results[0].command.label, "To-Do");
        assert_eq!(results[0].score, SCORE_EXACT);
    }

    #[test]
    fn exact_label_beats_description_hit() {
        let catalog = Catalog::new(vec![plain("Notes", "things to-do later"), plain("To-Do", "")]);
        let results = run(&catalog, "to-do");
        assert_eq!(labels(&results), vec!["To-Do", "Notes"]);
        assert_eq!(results[1].score, SCORE_DESCRIPTION);
    }

    #[test]
    fn bands_are_exclusive() {
        let catalog = Catalog::builtin();
        let results = run(&catalog, "highlight");
        // label and synonym both match; only the exact band counts
        assert_eq!(results[0].command.label, "Highlight");
        assert_eq!(results[0].score, SCORE_EXACT);
    }

    #[test]
    fn contains_beats_synonym() {
        let catalog = Catalog::builtin();
        let results = run(&catalog, "list");
        assert_eq!(labels(&results), vec!["Bullet List", "Numbered List"]);
        assert!(results.iter().all(|m| m.score == SCORE_CONTAINS));
    }

    #[test]
    fn synonym_match_scores_fifteen() {
        let catalog = Catalog::builtin();
        let results = run(&catalog, "latex");
        assert_eq!(labels(&results), vec!["Math Block"]);
        assert_eq!(results[0].score, SCORE_SYNONYM);
    }

    #[test]
    fn description_match_scores_five() {
        let catalog = Catalog::builtin();
        let results = run(&catalog, "separator");
        // "separator" is both a synonym and in the description; synonym wins
        assert_eq!(results[0].score, SCORE_SYNONYM);

        let results = run(&catalog, "formula");
        assert_eq!(results[0].command.label, "Math Block");

        let results = run(&catalog, "insert medium");
        assert_eq!(labels(&results), vec!["Heading 2"]);
        assert_eq!(results[0].score, SCORE_DESCRIPTION);
    }

    #[test]
    fn query_is_case_insensitive_and_trimmed() {
        let catalog = Catalog::builtin();
        assert_eq!(labels(&run(&catalog, "  CODE ")), labels(&run(&catalog, "code")));
    }

    #[test]
    fn no_match_returns_empty() {
        let catalog = Catalog::builtin();
        assert!(run(&catalog, "zzz").is_empty());
    }

    #[test]
    fn empty_catalog_yields_no_results() {
        let catalog = Catalog::new(Vec::new());
        assert!(run(&catalog, "").is_empty());
        assert!(run(&catalog, "head").is_empty());
    }

    #[test]
    fn results_capped_at_max() {
        let catalog = Catalog::builtin();
        // single letter hits most of the catalog
        let results = filter(&catalog.list_commands(), "e", 4);
        assert_eq!(results.len(), 4);
    }

    #[test]
    fn match_count_ignores_cap() {
        let catalog = Catalog::builtin();
        let candidates = catalog.list_commands();
        assert_eq!(filter(&candidates, "e", 3).len(), 3);
        assert!(match_count(&candidates, "e") > 3);
        assert_eq!(match_count(&candidates, ""), DEFAULT_SHORTLIST.len());
        assert_eq!(match_count(&candidates, "zzz"), 0);
    }

    #[test]
    fn recency_breaks_score_ties() {
        let mut catalog = Catalog::builtin();
        assert_eq!(labels(&run(&catalog, "list")), vec!["Bullet List", "Numbered List"]);
        catalog.record_usage("Numbered List");
        assert_eq!(labels(&run(&catalog, "list")), vec!["Numbered List", "Bullet List"]);
    }

    #[test]
    fn recency_never_overrides_score() {
        let mut catalog = Catalog::builtin();
        catalog.record_usage("Heading 2");
        let results = run(&catalog, "heading 1");
        assert_eq!(results[0].command.label, "Heading 1");
    }

    #[test]
    fn recency_does_not_touch_default_view() {
        let mut catalog = Catalog::builtin();
        let before = labels(&run(&catalog, ""));
        catalog.record_usage("Code Block");
        catalog.record_usage("Math Block");
        assert_eq!(labels(&run(&catalog, "")), before);
    }

    #[test]
    fn scores_do_not_leak_between_queries() {
        let catalog = Catalog::builtin();
        let first = run(&catalog, "code");
        let _ = run(&catalog, "c");
        assert_eq!(run(&catalog, "code"), first);
    }
}
