//! revdiff CLI
//!
//! Command-line interface for revision diff formatting

use clap::{Parser, Subcommand, ValueEnum};
use revdiff_core::logging_facility::{init, Profile};
use revdiff_core_types::RequestContext;

mod commands;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogProfile {
    Development,
    Production,
    Test,
}

#[derive(Debug, Parser)]
#[command(name = "revdiff")]
#[command(about = "Revision diff formatting for versioned entities", long_about = None)]
struct Cli {
    /// Logging profile
    #[arg(long, value_enum, default_value_t = LogProfile::Development)]
    log_profile: LogProfile,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compute and format the diff between two entity snapshots
    Diff(commands::diff::DiffArgs),
    /// Render a stored revision document as a summary
    Show(commands::show::ShowArgs),
}

fn main() {
    let cli = Cli::parse();

    init(match cli.log_profile {
        LogProfile::Development => Profile::Development,
        LogProfile::Production => Profile::Production,
        LogProfile::Test => Profile::Test,
    });

    // One context per invocation; its id correlates the op's log events.
    let ctx = RequestContext::new();

    let result = match cli.command {
        Commands::Diff(args) => commands::diff::execute(&ctx, args),
        Commands::Show(args) => commands::show::execute(&ctx, args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
