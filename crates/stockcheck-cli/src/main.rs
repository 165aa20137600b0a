//! stockcheck CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(
    name = "stockcheck",
    version,
    about = "12-question stock checklist diagnosis"
)]
struct Cli {
    /// Diagnosis log file (overrides the config file)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the checklist questions and their ids
    Questions,

    /// Score a stock against the checklist and save the result
    Diagnose {
        /// Stock name (required; prompted for with --interactive)
        #[arg(long)]
        name: Option<String>,

        /// Current price
        #[arg(long, default_value = "0")]
        price: u64,

        /// Questions answered "yes", by id or alias (e.g. "g1,f2,chart.breakout")
        #[arg(long, value_delimiter = ',')]
        check: Vec<String>,

        /// Ask every question on stdin
        #[arg(long, short)]
        interactive: bool,

        /// Output format: text, json
        #[arg(long)]
        format: Option<String>,
    },

    /// Show every saved diagnosis
    History {
        /// Output format: table, json
        #[arg(long)]
        format: Option<String>,
    },

    /// Delete the whole diagnosis log
    Clear {
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },

    /// Create a starter config file
    Init,
}

fn main() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("stockcheck=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = || commands::Settings::resolve(cli.config.as_deref(), cli.log_file.clone());

    let result = match cli.command {
        Commands::Questions => commands::questions::execute(),
        Commands::Diagnose {
            ref name,
            price,
            ref check,
            interactive,
            ref format,
        } => settings().and_then(|s| {
            commands::diagnose::execute(
                &s,
                name.clone(),
                price,
                check,
                interactive,
                format.as_deref(),
            )
        }),
        Commands::History { ref format } => {
            settings().and_then(|s| commands::history::execute(&s, format.as_deref()))
        }
        Commands::Clear { yes } => settings().and_then(|s| commands::clear::execute(&s, yes)),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
