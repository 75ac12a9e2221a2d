//! Position pools and the optimal-lineup calculator.
//!
//! The optimal lineup is found greedily: every fixed slot is filled with the
//! best players at its position, then the FLEX slots take the best of the
//! RB/WR/TE players left over. Slot contributions are additive and only FLEX
//! is shared between positions, so taking the largest leftovers is exact.

use std::collections::BTreeMap;

use crate::{
    cli::types::{PlayerId, Position},
    sleeper::types::{Matchup, PlayerDirectory},
};

/// How many of each slot a league starts, e.g. 1 QB, 2 RB, 2 WR, 1 TE, 1 FLEX.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartingSlots(BTreeMap<Position, usize>);

impl StartingSlots {
    pub fn new(counts: BTreeMap<Position, usize>) -> Self {
        Self(counts)
    }

    /// Count slot labels from a league's `roster_positions`.
    ///
    /// Bench, IR, taxi and superflex labels are not part of the fixed lineup
    /// model and are skipped.
    pub fn from_roster_positions(labels: &[String]) -> Self {
        let mut counts = BTreeMap::new();
        for label in labels {
            if let Ok(position) = label.parse::<Position>() {
                *counts.entry(position).or_insert(0) += 1;
            }
        }
        Self(counts)
    }

    pub fn count(&self, position: Position) -> usize {
        self.0.get(&position).copied().unwrap_or(0)
    }
}

/// Players from `matchup.players` whose directory position matches, in roster order.
///
/// Players missing from the directory have no known position and are never returned.
pub fn players_at_position<'a>(
    matchup: &'a Matchup,
    position: Position,
    directory: &PlayerDirectory,
) -> Vec<&'a PlayerId> {
    matchup
        .players
        .iter()
        .filter(|id| directory.get(*id).and_then(|p| p.position) == Some(position))
        .collect()
}

/// Weekly points of every player at `position`. A player with no entry in
/// `players_points` scored nothing.
pub fn position_points(
    matchup: &Matchup,
    position: Position,
    directory: &PlayerDirectory,
) -> Vec<f64> {
    players_at_position(matchup, position, directory)
        .into_iter()
        .map(|id| matchup.player_points(id).unwrap_or(0.0))
        .collect()
}

/// Split descending-sorted points into the top `count` and the rest.
fn take_top(mut points: Vec<f64>, count: usize) -> (Vec<f64>, Vec<f64>) {
    points.sort_by(|a, b| b.total_cmp(a));
    let rest = points.split_off(count.min(points.len()));
    (points, rest)
}

/// Maximum points this roster could have scored with a legal lineup.
pub fn optimal_lineup_points(
    matchup: &Matchup,
    slots: &StartingSlots,
    directory: &PlayerDirectory,
) -> f64 {
    let mut total = 0.0;
    let mut flex_pool = Vec::new();

    for position in Position::FIXED {
        let points = position_points(matchup, position, directory);
        let (locked, leftover) = take_top(points, slots.count(position));
        total += locked.iter().sum::<f64>();
        if position.is_flex_eligible() {
            flex_pool.extend(leftover);
        }
    }

    let (flex, _) = take_top(flex_pool, slots.count(Position::FLEX));
    total + flex.iter().sum::<f64>()
}
