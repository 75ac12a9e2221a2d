//! Unit tests for Sleeper types and data structures

use super::*;
use serde_json::json;

#[cfg(test)]
mod types_tests {
    use super::*;

    fn matchup_json() -> serde_json::Value {
        json!({
            "matchup_id": 3,
            "roster_id": 1,
            "points": 60.0,
            "starters": ["4046", "6794", "DET"],
            "starters_points": [10.0, 20.0, 30.0],
            "players": ["4046", "6794", "DET", "8130"],
            "players_points": {
                "4046": 10.0,
                "6794": 20.0,
                "DET": 30.0,
                "8130": 7.5
            },
            "custom_points": null
        })
    }

    #[test]
    fn test_matchup_deserialization() {
        let matchup: Matchup = serde_json::from_value(matchup_json()).unwrap();

        assert_eq!(matchup.matchup_id, Some(3));
        assert_eq!(matchup.roster_id, RosterId::new(1));
        assert_eq!(matchup.starters.len(), 3);
        assert_eq!(matchup.starters_points, vec![10.0, 20.0, 30.0]);
        assert_eq!(matchup.player_points(&PlayerId::from("8130")), Some(7.5));
        assert_eq!(matchup.player_points(&PlayerId::from("9999")), None);
    }

    #[test]
    fn test_matchup_totals_and_bench() {
        let matchup: Matchup = serde_json::from_value(matchup_json()).unwrap();

        assert_eq!(matchup.total_starter_points(), 60.0);
        assert_eq!(matchup.bench_players(), vec![&PlayerId::from("8130")]);
    }

    #[test]
    fn test_matchup_null_collections() {
        let matchup: Matchup = serde_json::from_value(json!({
            "matchup_id": null,
            "roster_id": 4,
            "starters": null,
            "starters_points": null,
            "players": null,
            "players_points": null
        }))
        .unwrap();

        assert_eq!(matchup.matchup_id, None);
        assert!(matchup.starters.is_empty());
        assert!(matchup.players_points.is_empty());
        assert_eq!(matchup.total_starter_points(), 0.0);
        assert_eq!(matchup.points, 0.0);
    }

    #[test]
    fn test_league_deserialization() {
        let league: League = serde_json::from_value(json!({
            "name": "Dynasty Degenerates",
            "sport": "nfl",
            "season": "2023",
            "league_id": "1048313545995296768",
            "total_rosters": 12,
            "roster_positions": ["QB", "RB", "RB", "WR", "WR", "TE", "FLEX", "K", "DEF", "BN", "BN"],
            "scoring_settings": {"pass_td": 4.0, "rec": 1.0, "fum_lost": -2.0}
        }))
        .unwrap();

        assert_eq!(league.league_id.as_str(), "1048313545995296768");
        assert_eq!(league.season_year(), Some(Season::new(2023)));
        assert_eq!(league.roster_positions.len(), 11);
        assert_eq!(league.scoring_settings.get("rec"), Some(1.0));
        assert_eq!(league.scoring_settings.get("pass_yd"), None);
    }

    #[test]
    fn test_roster_orphan_and_null_players() {
        let roster: Roster = serde_json::from_value(json!({
            "owner_id": null,
            "roster_id": 9,
            "players": null,
            "starters": []
        }))
        .unwrap();

        assert!(roster.owner_id.is_none());
        assert!(roster.players.is_empty());
    }

    #[test]
    fn test_weekly_stats_missing_counters_default_to_zero() {
        let stats: WeeklyStats = serde_json::from_value(json!({
            "4046": {"pass_yd": 305.0, "fum_lost": 1.0},
            "6794": {"rec_td": 2.0, "rush_td": 1.0},
            "DET": {"def_td": 1.0, "pts_allow": 17.0}
        }))
        .unwrap();

        assert_eq!(stats[&PlayerId::from("4046")].fum_lost, 1.0);
        assert_eq!(stats[&PlayerId::from("4046")].rec_td, 0.0);
        assert_eq!(stats[&PlayerId::from("6794")].non_passing_touchdowns(), 3.0);
        assert_eq!(stats[&PlayerId::from("DET")].non_passing_touchdowns(), 1.0);
    }

    #[test]
    fn test_season_projections_with_null_weeks() {
        let projections: SeasonProjections = serde_json::from_value(json!({
            "1": {"stats": {"pass_yd": 250.0, "pass_td": 2.0}, "week": 1},
            "2": null
        }))
        .unwrap();

        let week_one = projected_week_stats(&projections, Week::new(1)).unwrap();
        assert_eq!(week_one["pass_td"], 2.0);
        assert!(projections["2"].is_none());
        assert!(projected_week_stats(&projections, Week::new(2)).is_none());
        assert!(projected_week_stats(&projections, Week::new(3)).is_none());
    }

    #[test]
    fn test_projection_week_without_stats_is_unprojected() {
        let projections: SeasonProjections = serde_json::from_value(json!({
            "2": {"player_id": "4046", "team": "KC"},
            "3": {"stats": null, "week": 3}
        }))
        .unwrap();

        assert!(projections["2"].as_ref().unwrap().stats.is_none());
        assert!(projected_week_stats(&projections, Week::new(2)).is_none());
        assert!(projected_week_stats(&projections, Week::new(3)).is_none());
    }

    #[test]
    fn test_league_info_display_names() {
        let league: League = serde_json::from_value(json!({
            "name": "Test League",
            "season": "2023",
            "league_id": "1"
        }))
        .unwrap();
        let users = vec![LeagueUser {
            user_id: "u1".to_string(),
            display_name: "Alice".to_string(),
        }];
        let rosters = vec![
            Roster {
                owner_id: Some("u1".to_string()),
                roster_id: RosterId::new(1),
                players: vec![],
                starters: vec![],
            },
            Roster {
                owner_id: None,
                roster_id: RosterId::new(2),
                players: vec![],
                starters: vec![],
            },
        ];

        let info = LeagueInfo::new(league, users, rosters);

        assert_eq!(info.owner_name(&info.rosters[0]), "Alice");
        assert_eq!(info.owner_name(&info.rosters[1]), "Roster 2");
    }
}
