//! `fedcare clean`

use clap::Args;

use super::CommandContext;
use crate::display;
use crate::error::FedcareResult;
use crate::maintenance::{run_clean, CleanMode};

#[derive(Args, Debug, Clone, Default)]
pub struct CleanArgs {
    /// Actually run the cleanup (needs root)
    #[arg(long)]
    pub apply: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Handle `fedcare clean`; dry-run unless `--apply` is given
pub fn handle_clean_command(ctx: &CommandContext, args: CleanArgs) -> FedcareResult<()> {
    let report = run_clean(CleanMode::from_apply_flag(args.apply), &ctx.elevator());

    if args.json {
        println!("{}", display::to_json(&report)?);
    } else {
        print!("{}", display::format_clean_report(&report));
    }
    Ok(())
}
