use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::Format;

#[derive(Parser)]
#[command(name = "permlens")]
#[command(version, about = "Permission export auditor", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the permission group of each name
    Classify {
        /// Permission names
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Group totals, role and feature breakdowns and top permissions
    Report {
        /// Path to the session JSON export
        file: PathBuf,

        /// Restrict the report to one role
        #[arg(short, long)]
        role: Option<String>,

        /// Number of top permissions to list
        #[arg(long)]
        top: Option<usize>,

        /// Analysis limits (YAML, TOML or JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Per-column statistics and shared property keys
    Summary {
        /// Path to the session JSON export
        file: PathBuf,

        /// Columns to summarize (all when omitted)
        #[arg(long = "header")]
        headers: Vec<String>,

        /// Analysis limits (YAML, TOML or JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Search the rows and print one page
    Search {
        /// Path to the session JSON export
        file: PathBuf,

        /// Case-insensitive text to look for
        term: String,

        /// 1-based page number
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Write every matching row to this CSV file
        #[arg(long)]
        export: Option<PathBuf>,

        /// Analysis limits (YAML, TOML or JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Validate that an export can drive the permission reports
    Check {
        /// Path to the session JSON export
        file: PathBuf,
    },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Classify { names } => {
            commands::classify::run(&names);
        }
        Commands::Report {
            file,
            role,
            top,
            config,
            format,
        } => {
            commands::report::run(&file, role.as_deref(), top, config.as_deref(), format)?;
        }
        Commands::Summary {
            file,
            headers,
            config,
            format,
        } => {
            commands::summary::run(&file, &headers, config.as_deref(), format)?;
        }
        Commands::Search {
            file,
            term,
            page,
            export,
            config,
        } => {
            commands::search::run(&file, &term, page, export.as_deref(), config.as_deref())?;
        }
        Commands::Check { file } => {
            commands::check::run(&file)?;
        }
    }

    Ok(())
}
