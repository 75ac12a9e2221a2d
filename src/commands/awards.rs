//! Season award schedule command implementation

use tracing::{info, warn};

use crate::{awards::WeekSummary, cli::LeagueArgs, Result};

use super::common::{print_json, CommandContext};

/// Handle the awards command: every scheduled award, in schedule order.
pub async fn handle_awards(args: LeagueArgs, as_json: bool) -> Result<()> {
    let ctx = CommandContext::new(&args).await?;
    let summaries = run_schedule(&ctx).await;

    if as_json {
        print_json(&summaries)?;
    } else {
        for summary in &summaries {
            println!("{summary}\n");
        }
        println!("{}", format_recap(&summaries));
    }

    let failed = summaries.iter().filter(|s| !s.is_ok()).count();
    if failed > 0 {
        warn!(failed, total = summaries.len(), "Some scheduled awards failed");
    }

    Ok(())
}

/// Summaries for the configured schedule. Failed weeks are kept in place.
pub async fn run_schedule(ctx: &CommandContext) -> Vec<WeekSummary> {
    let mut summaries = Vec::with_capacity(ctx.config.schedule.len());

    for scheduled in &ctx.config.schedule {
        info!(week = %scheduled.week, award = %scheduled.award, "Computing award");
        summaries.push(ctx.week_summary(scheduled.week, scheduled.award).await);
    }

    summaries
}

/// One line per scheduled award naming its winner.
pub fn format_recap(summaries: &[WeekSummary]) -> String {
    let mut lines = vec!["Season recap:".to_string()];

    for summary in summaries {
        let outcome = match (summary.is_ok(), summary.winner()) {
            (false, _) => "failed".to_string(),
            (true, Some(winner)) => match winner.score {
                Some(score) => format!("{} ({:.2})", winner.owner, score),
                None => winner.owner.clone(),
            },
            (true, None) => "no winner".to_string(),
        };
        lines.push(format!(
            "   Week {} {}: {}",
            summary.week, summary.criterion, outcome
        ));
    }

    lines.join("\n")
}
