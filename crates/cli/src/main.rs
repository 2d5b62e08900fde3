//! The `druid-sql` command-line tool.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use druid_sql_cli::{run, Command, Context};

/// Translate Druid native queries into SQL.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// The directory holding the configuration.
    #[arg(
        long,
        global = true,
        value_name = "DIRECTORY",
        env = "DRUID_SQL_CONFIGURATION_DIR"
    )]
    configuration: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    run(
        args.command,
        Context {
            configuration_dir: args.configuration,
        },
    )
    .await
}
