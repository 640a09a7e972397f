//! `fedcare restore`

use clap::Args;

use super::CommandContext;
use crate::backup::{list_snapshots, resolve_source, RestoreExecutor, RestoreRequest};
use crate::display;
use crate::error::FedcareResult;

#[derive(Args, Debug, Clone, Default)]
pub struct RestoreArgs {
    /// List available backups, newest first
    #[arg(long)]
    pub list: bool,

    /// Restore from the newest backup
    #[arg(long)]
    pub latest: bool,

    /// Backup name under the backup root, or an absolute path
    #[arg(long, value_name = "NAME_OR_PATH")]
    pub source: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Handle `fedcare restore`
pub fn handle_restore_command(ctx: &CommandContext, args: RestoreArgs) -> FedcareResult<()> {
    let source = match RestoreRequest::from_flags(args.list, args.latest, args.source)? {
        RestoreRequest::List => {
            let snapshots = list_snapshots(&ctx.root)?;
            if args.json {
                println!(
                    "{}",
                    display::to_json(&display::snapshot_list_document(&snapshots))?
                );
            } else {
                print!("{}", display::format_snapshot_list(&ctx.root, &snapshots));
            }
            return Ok(());
        }
        RestoreRequest::Restore(source) => source,
    };

    let snapshot = resolve_source(&ctx.root, &source)?;
    let elevator = ctx.elevator();
    let report = RestoreExecutor::new(&elevator).restore(&snapshot);

    if args.json {
        println!("{}", display::to_json(&display::restore_document(&report))?);
    } else {
        print!("{}", display::format_restore_report(&report));
    }
    Ok(())
}
