//! glowbook-suggest - smart search suggestions from the command line
//!
//! Runs the suggestion engine against a JSON catalog and manages the
//! locally stored search history.

use clap::{Parser, Subcommand, ValueEnum};
use glowbook_cli::output::Status;
use glowbook_core::config::Config;
use glowbook_core::error::{exit_codes, ErrorCode, ErrorReport};
use glowbook_search::SearchField;
use glowbook_telemetry::TelemetryConfig;
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;

/// Smart search suggestions for Glowbook catalogs
#[derive(Parser)]
#[command(name = "glowbook-suggest")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to a glowbook.toml configuration file
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

/// How command results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON on stdout
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest catalog items for a query (popular items when the query is empty)
    Suggest {
        /// Free-text query
        #[arg(default_value = "")]
        query: String,

        /// JSON catalog of searchable items
        #[arg(short = 'C', long)]
        catalog: PathBuf,

        /// Maximum number of suggestions
        #[arg(short, long, allow_negative_numbers = true)]
        max: Option<i64>,

        /// Maximum edit distance for fuzzy matches
        #[arg(short, long, allow_negative_numbers = true)]
        threshold: Option<i64>,

        /// Fields to scan, in order (name, description, category)
        #[arg(long, value_delimiter = ',')]
        fields: Vec<SearchField>,

        /// Record the query in the search history
        #[arg(short, long)]
        record: bool,
    },

    /// Show popular items from a catalog
    Popular {
        /// JSON catalog of searchable items
        #[arg(short = 'C', long)]
        catalog: PathBuf,

        /// Number of items to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Manage the search history
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },

    /// Print the normalized form of a text
    Normalize {
        /// Text to normalize
        text: String,
    },

    /// Print the edit distance between two normalized texts
    Distance {
        /// First text
        a: String,

        /// Second text
        b: String,
    },
}

#[derive(Subcommand)]
enum HistoryAction {
    /// List remembered queries, newest first
    List,

    /// Remember a query
    Add {
        /// Query to remember
        query: String,
    },

    /// Forget all remembered queries
    Clear,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let format = cli.format;

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => return fail(&anyhow::Error::from(e), format),
    };

    let telemetry = TelemetryConfig::with_level(config.schema.logging.level.clone()).verbose(cli.verbose);
    if let Err(e) = glowbook_telemetry::init_with_config(telemetry) {
        Status::warning(&e.to_string());
    }

    let result = match cli.command {
        Commands::Suggest { query, catalog, max, threshold, fields, record } => {
            let options = commands::suggest::SuggestOptions { max, threshold, fields, record };
            commands::suggest::run(&config, &query, &catalog, options, format)
        }

        Commands::Popular { catalog, limit } => {
            commands::suggest::run_popular(&config, &catalog, limit, format)
        }

        Commands::History { action } => match action {
            HistoryAction::List => commands::history::list(&config, format),
            HistoryAction::Add { query } => commands::history::add(&config, &query, format),
            HistoryAction::Clear => commands::history::clear(&config, format),
        },

        Commands::Normalize { text } => commands::text::normalize(&text, format),

        Commands::Distance { a, b } => commands::text::distance(&a, &b, format),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => fail(&e, format),
    }
}

/// Report an error in the requested format and pick the exit code
fn fail(err: &anyhow::Error, format: OutputFormat) -> ExitCode {
    match format {
        OutputFormat::Text => Status::error(&format!("{:#}", err)),
        OutputFormat::Json => {
            let body = serde_json::json!({ "error": error_report(err) });
            println!("{}", serde_json::to_string_pretty(&body).unwrap_or_else(|_| body.to_string()));
        }
    }
    ExitCode::from(exit_code_for(err) as u8)
}

/// Structured report for JSON output; errors from outside core count as internal
fn error_report(err: &anyhow::Error) -> ErrorReport {
    match err.downcast_ref::<glowbook_core::Error>() {
        Some(e) => e.to_report(),
        None => glowbook_core::Error::new(ErrorCode::Internal, format!("{:#}", err)).to_report(),
    }
}

/// Map an error to a process exit code
fn exit_code_for(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<glowbook_core::Error>().map(|e| e.code) {
        Some(
            ErrorCode::ConfigError
            | ErrorCode::ConfigNotFound
            | ErrorCode::ConfigParseError
            | ErrorCode::InvalidConfigValue,
        ) => {
            exit_codes::CONFIG_ERROR
        }
        Some(ErrorCode::InvalidCatalog | ErrorCode::FileNotFound) => exit_codes::INPUT_ERROR,
        _ => exit_codes::FAILURE,
    }
}
