//! `fedcare backup`

use std::path::PathBuf;

use clap::Args;

use super::CommandContext;
use crate::backup::{default_destination, SnapshotReport, SnapshotWriter};
use crate::display;
use crate::error::FedcareResult;

#[derive(Args, Debug, Clone, Default)]
pub struct BackupArgs {
    /// Snapshot directory (default: <root>/<YYYYMMDD-HHMMSS>)
    #[arg(long)]
    pub dest: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Write a snapshot and return its report without printing
pub fn run_backup(ctx: &CommandContext, args: &BackupArgs) -> FedcareResult<SnapshotReport> {
    let dest = args
        .dest
        .clone()
        .unwrap_or_else(|| default_destination(&ctx.root, &chrono::Local::now()));

    SnapshotWriter::new(ctx.settings.targets.clone()).write(&dest)
}

/// Handle `fedcare backup`
pub fn handle_backup_command(ctx: &CommandContext, args: BackupArgs) -> FedcareResult<()> {
    let report = run_backup(ctx, &args)?;

    if args.json {
        println!("{}", display::to_json(&report)?);
    } else {
        print!("{}", display::format_snapshot_report(&report));
    }
    Ok(())
}
