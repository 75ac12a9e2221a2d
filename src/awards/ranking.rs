//! Ranking of prize entries.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Which end of the score range wins an award.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ascending,
    Descending,
}

/// One owner's result for an award. `score` is `None` when the award does
/// not apply to the roster this week (e.g. a margin-of-victory award for a
/// roster that lost).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrizeEntry {
    pub owner: String,
    pub score: Option<f64>,
}

impl PrizeEntry {
    pub fn new(owner: impl Into<String>, score: Option<f64>) -> Self {
        Self {
            owner: owner.into(),
            score,
        }
    }
}

/// Order entries for display, best first.
///
/// Scored entries are stably sorted ascending and, for a descending award,
/// the whole sorted run is reversed afterwards. Equal scores therefore keep
/// input order when ascending and come out in reverse input order when
/// descending. `0.0` and `-0.0` count as equal. Entries without a score
/// follow in input order either way.
pub fn rank(entries: Vec<PrizeEntry>, direction: Direction) -> Vec<PrizeEntry> {
    let (mut scored, unscored): (Vec<_>, Vec<_>) =
        entries.into_iter().partition(|e| e.score.is_some());

    scored.sort_by(|a, b| {
        let (a, b) = (a.score.unwrap_or_default(), b.score.unwrap_or_default());
        a.partial_cmp(&b).unwrap_or(Ordering::Equal)
    });
    if direction == Direction::Descending {
        scored.reverse();
    }

    scored.extend(unscored);
    scored
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(scores: &[(&str, Option<f64>)]) -> Vec<PrizeEntry> {
        scores
            .iter()
            .map(|(owner, score)| PrizeEntry::new(*owner, *score))
            .collect()
    }

    fn owners(ranked: &[PrizeEntry]) -> Vec<&str> {
        ranked.iter().map(|e| e.owner.as_str()).collect()
    }

    #[test]
    fn test_rank_ascending_is_stable() {
        let ranked = rank(
            entries(&[
                ("a", Some(3.0)),
                ("b", Some(1.0)),
                ("c", Some(3.0)),
                ("d", Some(2.0)),
            ]),
            Direction::Ascending,
        );
        assert_eq!(owners(&ranked), vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_rank_descending_reverses_ascending() {
        let input = entries(&[
            ("a", Some(3.0)),
            ("b", Some(1.0)),
            ("c", Some(3.0)),
            ("d", Some(2.0)),
            ("e", Some(1.0)),
        ]);

        let mut ascending = rank(input.clone(), Direction::Ascending);
        ascending.reverse();
        let descending = rank(input, Direction::Descending);

        assert_eq!(descending, ascending);
        // Ties come out in reverse input order.
        assert_eq!(owners(&descending), vec!["c", "a", "d", "e", "b"]);
    }

    #[test]
    fn test_unscored_entries_rank_last_in_both_directions() {
        let input = entries(&[
            ("lost", None),
            ("a", Some(5.0)),
            ("tied", None),
            ("b", Some(9.0)),
        ]);

        let ascending = rank(input.clone(), Direction::Ascending);
        assert_eq!(owners(&ascending), vec!["a", "b", "lost", "tied"]);

        let descending = rank(input, Direction::Descending);
        assert_eq!(owners(&descending), vec!["b", "a", "lost", "tied"]);
    }

    #[test]
    fn test_negative_scores_sort_below_zero() {
        let ranked = rank(
            entries(&[("a", Some(0.0)), ("b", Some(-4.5)), ("c", Some(2.0))]),
            Direction::Ascending,
        );
        assert_eq!(owners(&ranked), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_signed_zeros_tie() {
        let scores = [("a", Some(0.0)), ("b", Some(-0.0))];

        let ranked = rank(entries(&scores), Direction::Ascending);
        assert_eq!(owners(&ranked), vec!["a", "b"]);

        let ranked = rank(entries(&scores), Direction::Descending);
        assert_eq!(owners(&ranked), vec!["b", "a"]);
    }

    #[test]
    fn test_rank_empty() {
        assert!(rank(Vec::new(), Direction::Descending).is_empty());
    }
}
