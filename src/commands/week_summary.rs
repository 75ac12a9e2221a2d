//! Single week, single award command implementation

use crate::{awards::Criterion, cli::LeagueArgs, Result, Week};

use super::common::{print_json, CommandContext};

/// Handle the week summary command
pub async fn handle_week_summary(
    args: LeagueArgs,
    week: Week,
    award: Criterion,
    as_json: bool,
) -> Result<()> {
    let ctx = CommandContext::new(&args).await?;
    let summary = ctx.week_summary(week, award).await;

    if as_json {
        print_json(&summary)?;
    } else {
        println!("{summary}");
    }

    Ok(())
}
