//! Hiscores CLI
//!
//! Fetches and normalizes Old School RuneScape hiscores data.
//!
//! Usage:
//!   hiscores run "Lynx Titan" Zezima --category combat --category raids
//!   hiscores reconcile Zezima
//!   hiscores mode "Lynx Titan" --skip-ultimate

mod config;
mod main_lib;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use hiscores_api::{GameMode, ProbeOptions};
use hiscores_core::{CategoryGroup, PipelineRequest};

use config::Config;
use main_lib::{build_state, init_tracing, print_json};

#[derive(Parser, Debug)]
#[command(name = "hiscores")]
#[command(about = "Fetch, reconcile and normalize hiscores player data", version)]
struct Cli {
    /// Category YAML file (defaults to the embedded taxonomy)
    #[arg(long, global = true)]
    taxonomy: Option<PathBuf>,

    /// Hiscores host, e.g. https://secure.runescape.com
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate, reconcile, fetch and normalize players
    Run {
        #[arg(required = true)]
        usernames: Vec<String>,

        /// Category group to include (repeatable)
        #[arg(long = "category", short = 'c', required = true)]
        categories: Vec<CategoryGroup>,

        #[arg(long, default_value = "regular")]
        mode: GameMode,

        /// Continue when local categories differ from the hiscores
        #[arg(long)]
        allow_drift: bool,
    },

    /// Split usernames into valid and invalid ones
    Validate {
        #[arg(required = true)]
        usernames: Vec<String>,
    },

    /// Compare local categories with a player's live data
    Reconcile { username: String },

    /// Find which game mode an account belongs to
    Mode {
        username: String,

        #[arg(long)]
        skip_hardcore: bool,

        #[arg(long)]
        skip_ultimate: bool,
    },

    /// Print category groups and their members (all groups if none given)
    Categories { groups: Vec<CategoryGroup> },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    let cli = Cli::parse();
    init_tracing(&config.log_format);
    let config = config.with_overrides(cli.base_url, cli.timeout_secs, cli.taxonomy);

    dispatch(cli.command, &config).await
}

async fn dispatch(command: Command, config: &Config) -> anyhow::Result<()> {
    match command {
        Command::Validate { usernames } => print_json(&main_lib::validate(&usernames)?),
        Command::Categories { groups } => {
            let state = build_state(config);
            print_json(&main_lib::categories(&state, &groups)?)
        }
        Command::Run {
            usernames,
            categories,
            mode,
            allow_drift,
        } => {
            let state = build_state(config);
            let request = PipelineRequest::new(usernames, categories)
                .with_mode(mode)
                .allow_drift(allow_drift);
            print_json(&main_lib::run_pipeline(&state, request).await?)
        }
        Command::Reconcile { username } => {
            let state = build_state(config);
            print_json(&main_lib::reconcile(&state, &username).await?)
        }
        Command::Mode {
            username,
            skip_hardcore,
            skip_ultimate,
        } => {
            let state = build_state(config);
            let options = ProbeOptions {
                skip_hardcore,
                skip_ultimate,
            };
            print_json(&main_lib::detect_mode(&state, &username, options).await?)
        }
    }
}
