use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use fedcare::cli::{
    handle_backup_command, handle_clean_command, handle_restore_command, BackupArgs, CleanArgs,
    CommandContext, RestoreArgs,
};
use fedcare::config::{paths::FedcarePaths, settings::Settings};
use fedcare::error::FedcareError;

#[derive(Parser)]
#[command(
    name = "fedcare",
    version,
    about = "Fedora host maintenance: config snapshots, restore and cleanup",
    long_about = "fedcare captures important system configuration files into \
                  timestamped snapshots, restores them (escalating with sudo when \
                  a file is not writable), and runs routine cache cleanup."
)]
struct Cli {
    /// Backup root directory (default: ~/fedcare-backup)
    #[arg(long, global = true, env = "FEDCARE_BACKUP_ROOT")]
    root: Option<PathBuf>,

    /// Log filter, e.g. `info` or `fedcare=debug` (RUST_LOG wins)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Snapshot important configuration files
    Backup(BackupArgs),

    /// List backups or restore one onto the system
    Restore(RestoreArgs),

    /// Clean package cache and old journal logs (dry-run by default)
    Clean(CleanArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            let code = e
                .downcast_ref::<FedcareError>()
                .map_or(1, FedcareError::exit_code);
            ExitCode::from(code)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let paths = FedcarePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| settings.log_level.clone());
    fedcare::logging::init(&level)?;

    let root = paths.backup_root(cli.root.as_deref(), &settings);
    let ctx = CommandContext::new(root, settings);

    match cli.command {
        Some(Commands::Backup(args)) => handle_backup_command(&ctx, args)?,
        Some(Commands::Restore(args)) => handle_restore_command(&ctx, args)?,
        Some(Commands::Clean(args)) => handle_clean_command(&ctx, args)?,
        Some(Commands::Config) => {
            println!("fedcare Configuration");
            println!("=====================");
            println!("Config dir:   {}", paths.config_dir().display());
            println!("Config file:  {}", paths.settings_file().display());
            println!("Backup root:  {}", ctx.root.display());
            println!("Elevation:    {}", ctx.settings.elevation_command);
            println!("Log level:    {}", ctx.settings.log_level);
            println!();
            println!("Backup targets:");
            for target in &ctx.settings.targets {
                println!("  {}", target.display());
            }
        }
        None => {
            println!("fedcare - Fedora host maintenance");
            println!();
            println!("Run 'fedcare --help' for usage information.");
            println!("Run 'fedcare backup' to snapshot configuration files.");
        }
    }

    Ok(())
}
