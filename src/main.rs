use anyhow::Result;
use clap::{Parser, Subcommand};
use time::Date;

mod cli;

/// ipm-cadence - which entry of a repeating schedule is active today and tomorrow
#[derive(Parser)]
#[command(name = "ipm-cadence")]
#[command(about = "Resolve today's and tomorrow's entry of a multi-week schedule", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print today's and tomorrow's values
    Show {
        /// Resolve for this date (YYYY-MM-DD) instead of today
        #[arg(long, value_parser = cli::parse_date)]
        date: Option<Date>,
    },
    /// Print the panel as an HTML fragment
    Render {
        /// Resolve for this date (YYYY-MM-DD) instead of today
        #[arg(long, value_parser = cli::parse_date)]
        date: Option<Date>,
    },
    /// Print the week offset by day table derived from the schedule
    Table,
    /// Print the panel now and again at every local midnight until interrupted
    Watch,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = ipm_cadence::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    ipm_cadence::observability::init_observability(
        "ipm-cadence",
        env!("CARGO_PKG_VERSION"),
        &config.observability,
    )?;

    match cli.command {
        Commands::Show { date } => cli::show::show(&config, date),
        Commands::Render { date } => cli::show::render(&config, date),
        Commands::Table => cli::show::table(&config),
        Commands::Watch => cli::watch::watch(config).await,
    }
}
