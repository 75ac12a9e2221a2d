//! The library of weekly award criteria.
//!
//! Each [`Criterion`] resolves to a [`Rule`]: a description, a ranking
//! direction, the auxiliary data it reads and a score function. A score
//! function sees one roster's week through [`RosterWeek`] and returns `None`
//! when the award does not apply to that roster.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    awards::{
        lineup::{optimal_lineup_points, StartingSlots},
        projection::{projected_points, NonScoringKeys},
        ranking::Direction,
    },
    cli::types::{PlayerId, RosterId, Week},
    error::{AwardError, Result, RosterRole},
    sleeper::types::{
        LeagueInfo, Matchup, PlayerDirectory, PlayerStats, WeekProjections, WeeklyStats,
    },
};

/// Blackjack awards the best starter at or under this many points.
pub const BLACKJACK_CAP: f64 = 21.0;

/// The week's data an award is computed from. Matchups are always needed;
/// the other inputs are only read by criteria that declare them in
/// [`Inputs`].
#[derive(Debug, Clone, Copy)]
pub struct WeekData<'a> {
    pub matchups: &'a [Matchup],
    pub stats: Option<&'a WeeklyStats>,
    pub projections: Option<&'a WeekProjections>,
    pub players: Option<&'a PlayerDirectory>,
    pub non_scoring: &'a NonScoringKeys,
}

impl<'a> WeekData<'a> {
    pub fn new(matchups: &'a [Matchup], non_scoring: &'a NonScoringKeys) -> Self {
        Self {
            matchups,
            stats: None,
            projections: None,
            players: None,
            non_scoring,
        }
    }

    pub fn with_stats(mut self, stats: &'a WeeklyStats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_projections(mut self, projections: &'a WeekProjections) -> Self {
        self.projections = Some(projections);
        self
    }

    pub fn with_players(mut self, players: &'a PlayerDirectory) -> Self {
        self.players = Some(players);
        self
    }
}

/// Auxiliary data a criterion reads beyond the week's matchups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Inputs {
    pub stats: bool,
    pub projections: bool,
    pub players: bool,
}

impl Inputs {
    const MATCHUPS_ONLY: Inputs = Inputs {
        stats: false,
        projections: false,
        players: false,
    };
    const STATS: Inputs = Inputs {
        stats: true,
        projections: false,
        players: false,
    };
    const PROJECTIONS: Inputs = Inputs {
        stats: false,
        projections: true,
        players: false,
    };
    const PLAYERS: Inputs = Inputs {
        stats: false,
        projections: false,
        players: true,
    };
}

pub type ScoreFn = fn(&RosterWeek<'_>) -> Result<Option<f64>>;

/// How one criterion scores and ranks a week.
#[derive(Clone, Copy)]
pub struct Rule {
    pub description: &'static str,
    pub direction: Direction,
    pub inputs: Inputs,
    pub score: ScoreFn,
}

/// Weekly award criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Criterion {
    HighestStartingScore,
    LowestWinningStarter,
    HighestStarter,
    HighestBench,
    HighestLosingScore,
    SmallestWinMargin,
    LargestWinMargin,
    AboveProjection,
    BelowProjection,
    MostFumblesLost,
    Blackjack,
    NonPassingTouchdowns,
    OptimalLineupGap,
}

impl Criterion {
    pub const ALL: [Criterion; 13] = [
        Criterion::HighestStartingScore,
        Criterion::LowestWinningStarter,
        Criterion::HighestStarter,
        Criterion::HighestBench,
        Criterion::HighestLosingScore,
        Criterion::SmallestWinMargin,
        Criterion::LargestWinMargin,
        Criterion::AboveProjection,
        Criterion::BelowProjection,
        Criterion::MostFumblesLost,
        Criterion::Blackjack,
        Criterion::NonPassingTouchdowns,
        Criterion::OptimalLineupGap,
    ];

    pub fn rule(self) -> Rule {
        use Direction::{Ascending, Descending};

        match self {
            Criterion::HighestStartingScore => Rule {
                description: "Hot Start - Highest Starting Team Score",
                direction: Descending,
                inputs: Inputs::MATCHUPS_ONLY,
                score: starting_score,
            },
            Criterion::LowestWinningStarter => Rule {
                description: "Dead Weight - Lowest Scoring Starter in a Win",
                direction: Ascending,
                inputs: Inputs::MATCHUPS_ONLY,
                score: lowest_winning_starter,
            },
            Criterion::HighestStarter => Rule {
                description: "MVP - Highest Starting Player Score",
                direction: Descending,
                inputs: Inputs::MATCHUPS_ONLY,
                score: highest_starter,
            },
            Criterion::HighestBench => Rule {
                description: "Bench Mob - Highest Bench Score",
                direction: Descending,
                inputs: Inputs::MATCHUPS_ONLY,
                score: bench_score,
            },
            Criterion::HighestLosingScore => Rule {
                description: "Heartbreaker - Highest Starting Team Score in a Loss",
                direction: Descending,
                inputs: Inputs::MATCHUPS_ONLY,
                score: losing_score,
            },
            Criterion::SmallestWinMargin => Rule {
                description: "Photo Finish - Smallest Margin of Victory",
                direction: Ascending,
                inputs: Inputs::MATCHUPS_ONLY,
                score: winning_margin,
            },
            Criterion::LargestWinMargin => Rule {
                description: "Blowout - Largest Margin of Victory",
                direction: Descending,
                inputs: Inputs::MATCHUPS_ONLY,
                score: winning_margin,
            },
            Criterion::AboveProjection => Rule {
                description: "Overachiever - Most Starting Team Points Above Projection",
                direction: Descending,
                inputs: Inputs::PROJECTIONS,
                score: points_over_projection,
            },
            Criterion::BelowProjection => Rule {
                description: "Underachiever - Most Starting Team Points Below Projection",
                direction: Ascending,
                inputs: Inputs::PROJECTIONS,
                score: points_over_projection,
            },
            Criterion::MostFumblesLost => Rule {
                description: "Butterfingers - Most Starting Team Fumbles",
                direction: Descending,
                inputs: Inputs::STATS,
                score: fumbles_lost,
            },
            Criterion::Blackjack => Rule {
                description: "Blackjack - Starting Player Score Closest to 21 Without Going Over",
                direction: Descending,
                inputs: Inputs::MATCHUPS_ONLY,
                score: blackjack,
            },
            Criterion::NonPassingTouchdowns => Rule {
                description: "Ground Game - Most Starting Team Non-Passing Touchdowns",
                direction: Descending,
                inputs: Inputs::STATS,
                score: non_passing_touchdowns,
            },
            Criterion::OptimalLineupGap => Rule {
                description: "Set and Forget - Fewest Points Left Off the Optimal Lineup",
                direction: Ascending,
                inputs: Inputs::PLAYERS,
                score: optimal_lineup_gap,
            },
        }
    }

    /// Command-line and config file name of the criterion.
    pub fn name(self) -> &'static str {
        match self {
            Criterion::HighestStartingScore => "highest-starting-score",
            Criterion::LowestWinningStarter => "lowest-winning-starter",
            Criterion::HighestStarter => "highest-starter",
            Criterion::HighestBench => "highest-bench",
            Criterion::HighestLosingScore => "highest-losing-score",
            Criterion::SmallestWinMargin => "smallest-win-margin",
            Criterion::LargestWinMargin => "largest-win-margin",
            Criterion::AboveProjection => "above-projection",
            Criterion::BelowProjection => "below-projection",
            Criterion::MostFumblesLost => "most-fumbles-lost",
            Criterion::Blackjack => "blackjack",
            Criterion::NonPassingTouchdowns => "non-passing-touchdowns",
            Criterion::OptimalLineupGap => "optimal-lineup-gap",
        }
    }

    pub fn description(self) -> &'static str {
        self.rule().description
    }

    pub fn direction(self) -> Direction {
        self.rule().direction
    }

    pub fn inputs(self) -> Inputs {
        self.rule().inputs
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The matchup record of `roster_id` for the week.
pub fn find_matchup(matchups: &[Matchup], roster_id: RosterId) -> Result<&Matchup> {
    matchups
        .iter()
        .find(|m| m.roster_id == roster_id)
        .ok_or(AwardError::RosterNotFound {
            roster_id,
            role: RosterRole::Matchup,
        })
}

/// The matchup record of the roster `roster_id` played against.
pub fn find_opponent(matchups: &[Matchup], roster_id: RosterId) -> Result<&Matchup> {
    let own = find_matchup(matchups, roster_id)?;
    let not_found = AwardError::RosterNotFound {
        roster_id,
        role: RosterRole::Opponent,
    };
    let Some(group) = own.matchup_id else {
        return Err(not_found);
    };

    matchups
        .iter()
        .find(|m| m.matchup_id == Some(group) && m.roster_id != own.roster_id)
        .ok_or(not_found)
}

/// One roster's view of a week, handed to score functions.
pub struct RosterWeek<'a> {
    pub week: Week,
    pub own: &'a Matchup,
    pub league: &'a LeagueInfo,
    pub slots: &'a StartingSlots,
    pub data: &'a WeekData<'a>,
}

impl<'a> RosterWeek<'a> {
    pub fn opponent(&self) -> Result<&'a Matchup> {
        find_opponent(self.data.matchups, self.own.roster_id)
    }

    /// Starters that occupy a lineup slot. Sleeper fills empty slots with `"0"`.
    pub fn starters(&self) -> impl Iterator<Item = &'a PlayerId> {
        let own: &'a Matchup = self.own;
        own.starters.iter().filter(|id| !id.is_empty_slot())
    }

    /// Starting totals of this roster and its opponent.
    fn totals(&self) -> Result<(f64, f64)> {
        Ok((
            self.own.total_starter_points(),
            self.opponent()?.total_starter_points(),
        ))
    }

    fn points(&self, player_id: &PlayerId) -> Result<f64> {
        self.own
            .player_points(player_id)
            .ok_or_else(|| AwardError::StatLookupMissing {
                player_id: player_id.clone(),
                what: "weekly points",
            })
    }

    fn stats(&self, player_id: &PlayerId) -> Result<&'a PlayerStats> {
        let stats = self.data.stats.ok_or(AwardError::MissingWeekData {
            week: self.week,
            what: "player stats",
        })?;
        stats
            .get(player_id)
            .ok_or_else(|| AwardError::StatLookupMissing {
                player_id: player_id.clone(),
                what: "weekly stats",
            })
    }

    fn projection(&self, player_id: &PlayerId) -> Result<f64> {
        let projections = self.data.projections.ok_or(AwardError::MissingWeekData {
            week: self.week,
            what: "player projections",
        })?;
        let projected_stats =
            projections
                .get(player_id)
                .ok_or_else(|| AwardError::ProjectionUnavailable {
                    player_id: player_id.clone(),
                    week: self.week,
                })?;
        projected_points(
            projected_stats,
            &self.league.league.scoring_settings,
            self.data.non_scoring,
        )
    }
}

fn starting_score(ctx: &RosterWeek<'_>) -> Result<Option<f64>> {
    Ok(Some(ctx.own.total_starter_points()))
}

fn lowest_winning_starter(ctx: &RosterWeek<'_>) -> Result<Option<f64>> {
    let (own, opponent) = ctx.totals()?;
    if own <= opponent {
        return Ok(None);
    }
    Ok(ctx.own.starters_points.iter().copied().reduce(f64::min))
}

fn highest_starter(ctx: &RosterWeek<'_>) -> Result<Option<f64>> {
    Ok(ctx.own.starters_points.iter().copied().reduce(f64::max))
}

fn bench_score(ctx: &RosterWeek<'_>) -> Result<Option<f64>> {
    let mut total = 0.0;
    for player_id in ctx.own.bench_players() {
        total += ctx.points(player_id)?;
    }
    Ok(Some(total))
}

fn losing_score(ctx: &RosterWeek<'_>) -> Result<Option<f64>> {
    let (own, opponent) = ctx.totals()?;
    Ok((own < opponent).then_some(own))
}

fn winning_margin(ctx: &RosterWeek<'_>) -> Result<Option<f64>> {
    let (own, opponent) = ctx.totals()?;
    Ok((own > opponent).then_some(own - opponent))
}

fn points_over_projection(ctx: &RosterWeek<'_>) -> Result<Option<f64>> {
    let mut total = 0.0;
    for player_id in ctx.starters() {
        total += ctx.points(player_id)? - ctx.projection(player_id)?;
    }
    Ok(Some(total))
}

fn fumbles_lost(ctx: &RosterWeek<'_>) -> Result<Option<f64>> {
    let mut total = 0.0;
    for player_id in ctx.starters() {
        total += ctx.stats(player_id)?.fum_lost;
    }
    Ok(Some(total))
}

fn blackjack(ctx: &RosterWeek<'_>) -> Result<Option<f64>> {
    Ok(ctx
        .own
        .starters_points
        .iter()
        .copied()
        .filter(|points| *points <= BLACKJACK_CAP)
        .reduce(f64::max))
}

fn non_passing_touchdowns(ctx: &RosterWeek<'_>) -> Result<Option<f64>> {
    let mut total = 0.0;
    for player_id in ctx.starters() {
        total += ctx.stats(player_id)?.non_passing_touchdowns();
    }
    Ok(Some(total))
}

fn optimal_lineup_gap(ctx: &RosterWeek<'_>) -> Result<Option<f64>> {
    let players = ctx.data.players.ok_or(AwardError::MissingWeekData {
        week: ctx.week,
        what: "player directory",
    })?;
    let optimal = optimal_lineup_points(ctx.own, ctx.slots, players);
    Ok(Some(optimal - ctx.own.total_starter_points()))
}
