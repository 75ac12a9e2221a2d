//! League data command implementation

use crate::{cli::LeagueArgs, sleeper::LeagueInfo, Result};

use super::common::{print_json, CommandContext};

/// Handle the league data command
pub async fn handle_league_data(args: LeagueArgs, as_json: bool) -> Result<()> {
    let ctx = CommandContext::new(&args).await?;

    if as_json {
        print_json(&ctx.league)?;
    } else {
        println!("{}", format_league(&ctx.league));
    }

    Ok(())
}

/// Text rendering: league header, lineup slots, then one line per roster.
pub fn format_league(info: &LeagueInfo) -> String {
    let league = &info.league;
    let mut lines = vec![
        format!("League: {} ({})", league.name, league.league_id),
        format!("Season: {}, Rosters: {}", league.season, info.rosters.len()),
    ];

    let starting: Vec<&str> = league
        .roster_positions
        .iter()
        .map(String::as_str)
        .filter(|slot| *slot != "BN" && *slot != "IR" && *slot != "TAXI")
        .collect();
    lines.push(format!("Starting slots: {}", starting.join(", ")));

    for roster in &info.rosters {
        lines.push(format!(
            "   Roster {}: {} ({} players)",
            roster.roster_id,
            info.owner_name(roster),
            roster.players.len()
        ));
    }

    lines.join("\n")
}
