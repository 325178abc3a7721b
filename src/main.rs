//! # Slang Lexicon CLI (`slang`)
//!
//! The `slang` binary loads the slang-term catalog from its markdown source
//! and either answers a single query on the command line or serves the
//! JSON API.
//!
//! ## Usage
//!
//! ```bash
//! slang --config ./config/slang.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `slang check` | Ingest the data file and report rejected terms |
//! | `slang search "<query>"` | Search terms (exact matches first) |
//! | `slang browse` | List one alphabetical page of terms |
//! | `slang get <id>` | Print a full term record |
//! | `slang serve` | Start the HTTP server |

use clap::{Parser, Subcommand};
use slang_lexicon::{browse, config, get, ingest, search, server};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Slang Lexicon: search and browse a catalog of slang terms.
///
/// All commands accept a `--config` flag pointing to a TOML configuration
/// file. Without one, `./data/terms.md` and default limits are used.
#[derive(Parser)]
#[command(name = "slang", version, about)]
struct Cli {
    /// Path to configuration file (TOML).
    #[arg(long, global = true, default_value = "./config/slang.toml")]
    config: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ingest the data file and report accepted and rejected terms.
    ///
    /// Exits non-zero if any term was rejected or the file is unreadable.
    Check,

    /// Search terms by free text.
    ///
    /// Terms equal to the whole query come first, followed by terms whose
    /// name or definition contains any query word.
    Search {
        /// The search query string.
        query: String,
    },

    /// List terms alphabetically, one page at a time.
    Browse {
        /// Page number (1-based). Pages past the end show the last page.
        #[arg(long)]
        page: Option<i64>,

        /// Terms per page, at most `[browse].max_limit`. Defaults to
        /// `[browse].default_limit`.
        #[arg(long)]
        limit: Option<i64>,
    },

    /// Print a term by its id (e.g. `term-3`).
    Get {
        /// Term id.
        id: String,
    },

    /// Start the HTTP server on `[server].bind`.
    Serve,
}

fn init_tracing(verbose: u8, serving: bool) {
    let level = match (verbose, serving) {
        (0, false) => "warn",
        (0, true) | (1, _) => "info",
        (2, _) => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, matches!(cli.command, Commands::Serve));

    let cfg = if cli.config.exists() {
        config::load_config(&cli.config)?
    } else {
        tracing::warn!(
            path = %cli.config.display(),
            "config file not found, using defaults"
        );
        config::Config::minimal()
    };

    match cli.command {
        Commands::Check => {
            ingest::run_check(&cfg)?;
        }
        Commands::Search { query } => {
            search::run_search(&cfg, &query)?;
        }
        Commands::Browse { page, limit } => {
            browse::run_browse(&cfg, page, limit)?;
        }
        Commands::Get { id } => {
            get::run_get(&cfg, &id)?;
        }
        Commands::Serve => {
            server::run_server(&cfg).await?;
        }
    }

    Ok(())
}
