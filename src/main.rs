//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use sleeper_awards::{
    cli::{Commands, GetCmd, SleeperAwards},
    commands::{handle_awards, handle_league_data, handle_week_summary},
    core::logging,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = SleeperAwards::parse();
    logging::init(app.verbose);

    match app.command {
        Commands::Get { cmd } => match cmd {
            GetCmd::LeagueData { league, json } => handle_league_data(league, json)
                .await
                .context("failed to load league data")?,

            GetCmd::WeekSummary {
                league,
                week,
                award,
                json,
            } => handle_week_summary(league, week, award, json)
                .await
                .with_context(|| format!("failed to summarize week {week} ({award})"))?,

            GetCmd::Awards { league, json } => handle_awards(league, json)
                .await
                .context("failed to compute season awards")?,
        },
    }

    Ok(())
}
