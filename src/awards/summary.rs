//! Week summaries: one criterion applied to every roster in a league.

use std::fmt;

use serde::{Serialize, Serializer};
use tracing::{debug, warn};

use crate::{
    awards::{
        criteria::{find_matchup, Criterion, RosterWeek, WeekData},
        lineup::StartingSlots,
        ranking::{rank, PrizeEntry},
    },
    cli::types::Week,
    error::{AwardError, Result},
    sleeper::types::LeagueInfo,
};

fn ser_error<S>(error: &Option<AwardError>, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match error {
        Some(e) => serializer.serialize_some(&e.to_string()),
        None => serializer.serialize_none(),
    }
}

/// The ranked outcome of one award for one week.
///
/// A failed summary carries only the error: entries scored before the
/// failure are discarded.
#[derive(Debug, Serialize)]
pub struct WeekSummary {
    pub week: Week,
    pub criterion: Criterion,
    pub criteria: String,
    pub prize_entries: Vec<PrizeEntry>,
    #[serde(serialize_with = "ser_error")]
    pub error: Option<AwardError>,
}

impl WeekSummary {
    pub fn ranked(week: Week, criterion: Criterion, prize_entries: Vec<PrizeEntry>) -> Self {
        Self {
            week,
            criterion,
            criteria: criterion.description().to_string(),
            prize_entries,
            error: None,
        }
    }

    pub fn failed(week: Week, criterion: Criterion, error: AwardError) -> Self {
        Self {
            week,
            criterion,
            criteria: criterion.description().to_string(),
            prize_entries: Vec::new(),
            error: Some(error),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// The top-ranked entry, if the week produced one with a score.
    pub fn winner(&self) -> Option<&PrizeEntry> {
        self.prize_entries.first().filter(|e| e.score.is_some())
    }
}

impl fmt::Display for WeekSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(error) = &self.error {
            return write!(f, "Week {} Summary: {}", self.week, error);
        }

        write!(f, "Week {} Criteria: {}", self.week, self.criteria)?;
        for entry in &self.prize_entries {
            match entry.score {
                Some(score) => write!(f, "\n   Owner: {}, Score: {:.2}", entry.owner, score)?,
                None => write!(f, "\n   Owner: {}, Score: n/a", entry.owner)?,
            }
        }
        Ok(())
    }
}

/// Score every roster in the league with `criterion` and rank the results.
///
/// The first roster that fails to score fails the whole week.
pub fn summarize_week(
    criterion: Criterion,
    league: &LeagueInfo,
    week: Week,
    data: &WeekData<'_>,
) -> WeekSummary {
    match score_rosters(criterion, league, week, data) {
        Ok(entries) => {
            debug!(%week, ?criterion, rosters = entries.len(), "week ranked");
            WeekSummary::ranked(week, criterion, entries)
        }
        Err(error) => {
            warn!(%week, ?criterion, %error, "week summary failed");
            WeekSummary::failed(week, criterion, error)
        }
    }
}

fn score_rosters(
    criterion: Criterion,
    league: &LeagueInfo,
    week: Week,
    data: &WeekData<'_>,
) -> Result<Vec<PrizeEntry>> {
    let rule = criterion.rule();
    check_inputs(criterion, week, data)?;

    let slots = StartingSlots::from_roster_positions(&league.league.roster_positions);
    let mut entries = Vec::with_capacity(league.rosters.len());

    for roster in &league.rosters {
        let own = find_matchup(data.matchups, roster.roster_id)?;
        let ctx = RosterWeek {
            week,
            own,
            league,
            slots: &slots,
            data,
        };
        let score = (rule.score)(&ctx)?;
        debug!(roster_id = %roster.roster_id, ?score, "roster scored");
        entries.push(PrizeEntry::new(league.owner_name(roster), score));
    }

    Ok(rank(entries, rule.direction))
}

fn check_inputs(criterion: Criterion, week: Week, data: &WeekData<'_>) -> Result<()> {
    let inputs = criterion.inputs();
    let missing = if inputs.stats && data.stats.is_none() {
        Some("player stats")
    } else if inputs.projections && data.projections.is_none() {
        Some("player projections")
    } else if inputs.players && data.players.is_none() {
        Some("player directory")
    } else {
        None
    };

    match missing {
        Some(what) => Err(AwardError::MissingWeekData { week, what }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        awards::projection::NonScoringKeys,
        cli::types::{PlayerId, RosterId},
        error::RosterRole,
        sleeper::types::{League, LeagueUser, Matchup, Roster},
    };
    use std::collections::HashMap;

    fn league(roster_ids: &[u32]) -> LeagueInfo {
        let league: League = serde_json::from_value(serde_json::json!({
            "name": "Summary League",
            "season": "2023",
            "league_id": "42"
        }))
        .unwrap();
        let users = roster_ids
            .iter()
            .map(|id| LeagueUser {
                user_id: format!("u{id}"),
                display_name: format!("Owner {id}"),
            })
            .collect();
        let rosters = roster_ids
            .iter()
            .map(|id| Roster {
                owner_id: Some(format!("u{id}")),
                roster_id: RosterId::new(*id),
                players: vec![],
                starters: vec![],
            })
            .collect();
        LeagueInfo::new(league, users, rosters)
    }

    fn matchup(roster_id: u32, group: u32, starters_points: &[f64]) -> Matchup {
        let starters: Vec<PlayerId> = (0..starters_points.len())
            .map(|i| PlayerId::new(format!("{roster_id}-{i}")))
            .collect();
        Matchup {
            matchup_id: Some(group),
            roster_id: RosterId::new(roster_id),
            players: starters.clone(),
            players_points: starters
                .iter()
                .cloned()
                .zip(starters_points.iter().copied())
                .collect::<HashMap<_, _>>(),
            starters,
            starters_points: starters_points.to_vec(),
            points: starters_points.iter().sum(),
        }
    }

    #[test]
    fn test_summarize_week_ranks_descending() {
        let info = league(&[1, 2, 3, 4]);
        let matchups = vec![
            matchup(1, 1, &[10.0, 20.0]),
            matchup(2, 1, &[50.0]),
            matchup(3, 2, &[5.0]),
            matchup(4, 2, &[40.0, 1.0]),
        ];
        let keys = NonScoringKeys::default();
        let data = WeekData::new(&matchups, &keys);

        let summary = summarize_week(
            Criterion::HighestStartingScore,
            &info,
            Week::new(1),
            &data,
        );

        assert!(summary.is_ok());
        let owners: Vec<_> = summary.prize_entries.iter().map(|e| e.owner.as_str()).collect();
        assert_eq!(owners, vec!["Owner 2", "Owner 4", "Owner 1", "Owner 3"]);
        assert_eq!(summary.winner().unwrap().score, Some(50.0));
        assert_eq!(summary.criteria, "Hot Start - Highest Starting Team Score");
    }

    #[test]
    fn test_missing_matchup_fails_whole_week() {
        let info = league(&[1, 2, 3]);
        let matchups = vec![matchup(1, 1, &[10.0]), matchup(2, 1, &[20.0])];
        let keys = NonScoringKeys::default();
        let data = WeekData::new(&matchups, &keys);

        let summary = summarize_week(Criterion::HighestStarter, &info, Week::new(3), &data);

        assert!(!summary.is_ok());
        assert!(summary.prize_entries.is_empty());
        assert!(summary.winner().is_none());
        match summary.error {
            Some(AwardError::RosterNotFound { roster_id, role }) => {
                assert_eq!(roster_id, RosterId::new(3));
                assert_eq!(role, RosterRole::Matchup);
            }
            other => panic!("Expected RosterNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_first_failing_roster_decides_the_error() {
        // Roster 1 has no partner in its group and roster 3 has no matchup.
        let info = league(&[1, 2, 3]);
        let matchups = vec![matchup(1, 1, &[10.0]), matchup(2, 2, &[20.0])];
        let keys = NonScoringKeys::default();
        let data = WeekData::new(&matchups, &keys);

        let summary = summarize_week(Criterion::SmallestWinMargin, &info, Week::new(4), &data);

        assert!(summary.prize_entries.is_empty());
        match summary.error {
            Some(AwardError::RosterNotFound { roster_id, role }) => {
                assert_eq!(roster_id, RosterId::new(1));
                assert_eq!(role, RosterRole::Opponent);
            }
            other => panic!("Expected RosterNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_auxiliary_data_fails_before_scoring() {
        let info = league(&[1, 2]);
        let matchups = vec![matchup(1, 1, &[10.0]), matchup(2, 1, &[20.0])];
        let keys = NonScoringKeys::default();
        let data = WeekData::new(&matchups, &keys);

        let summary = summarize_week(Criterion::MostFumblesLost, &info, Week::new(12), &data);

        assert!(matches!(
            summary.error,
            Some(AwardError::MissingWeekData {
                what: "player stats",
                ..
            })
        ));
    }

    #[test]
    fn test_display_lists_entries() {
        let summary = WeekSummary::ranked(
            Week::new(13),
            Criterion::Blackjack,
            vec![
                PrizeEntry::new("Alice", Some(21.0)),
                PrizeEntry::new("Bob", None),
            ],
        );

        let text = summary.to_string();
        assert_eq!(
            text,
            "Week 13 Criteria: Blackjack - Starting Player Score Closest to 21 Without Going Over\n   Owner: Alice, Score: 21.00\n   Owner: Bob, Score: n/a"
        );
    }

    #[test]
    fn test_display_failure() {
        let summary = WeekSummary::failed(
            Week::new(2),
            Criterion::SmallestWinMargin,
            AwardError::RosterNotFound {
                roster_id: RosterId::new(5),
                role: RosterRole::Opponent,
            },
        );

        assert_eq!(
            summary.to_string(),
            "Week 2 Summary: Failed to find opponent roster (id: 5)"
        );
    }

    #[test]
    fn test_json_serializes_error_as_string() {
        let summary = WeekSummary::failed(
            Week::new(12),
            Criterion::MostFumblesLost,
            AwardError::StatLookupMissing {
                player_id: PlayerId::from("4046"),
                what: "weekly stats",
            },
        );

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["week"], 12);
        assert_eq!(json["criterion"], "most-fumbles-lost");
        assert_eq!(json["error"], "Missing weekly stats for player 4046");
        assert_eq!(json["prize_entries"], serde_json::json!([]));
    }
}
