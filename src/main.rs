//! Hero Rarity CLI
//!
//! Browse trait rarity statistics and look up individual heroes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use hero_rarity::aggregator::{available_categories, CategorySelection};
use hero_rarity::commands::{
    display_version, execute_browse, execute_hero, execute_traits, load_catalog, open_store,
    HeroArgs, StoreArgs, TraitsArgs,
};
use hero_rarity::output::render_category_bar;

/// Hero Rarity - trait rarity explorer for OnChain Heroes
#[derive(Parser, Debug)]
#[command(name = "hero-rarity")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Store base URL
    #[arg(long, global = true, env = "SUPABASE_URL")]
    url: Option<String>,

    /// Anonymous store API key
    #[arg(long, global = true, env = "SUPABASE_ANON_KEY", hide_env_values = true)]
    key: Option<String>,

    /// Read tables from a JSON snapshot instead of the store
    #[arg(long, global = true)]
    snapshot: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Show trait rarities by category
    Traits {
        /// Search trait values (case-insensitive)
        #[arg(short, long, default_value = "")]
        search: String,

        /// Category to show ("All" for the default view)
        #[arg(short, long, default_value = "All")]
        category: CategorySelection,

        /// Unfold every category
        #[arg(long)]
        expand_all: bool,

        /// Output path for a JSON report
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Look up a hero by id
    Hero {
        /// Hero id
        id: String,

        /// Output path for a JSON report
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List selectable categories
    Categories,

    /// Interactive session on stdin
    Browse,

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let store_args = StoreArgs {
        url: cli.url,
        key: cli.key,
        snapshot: cli.snapshot,
    };

    // Execute command
    match cli.command {
        Commands::Traits {
            search,
            category,
            expand_all,
            output,
        } => {
            let store = open_store(&store_args)?;
            let args = TraitsArgs {
                search,
                category,
                expand_all,
                output,
            };
            execute_traits(store.as_ref(), args)?;
        }

        Commands::Hero { id, output } => {
            let store = open_store(&store_args)?;
            execute_hero(store.as_ref(), HeroArgs { id, output })?;
        }

        Commands::Categories => {
            let store = open_store(&store_args)?;
            let catalog = load_catalog(store.as_ref());
            println!(
                "{}",
                render_category_bar(&available_categories(&catalog.traits), &CategorySelection::All)
            );
        }

        Commands::Browse => {
            let store = open_store(&store_args)?;
            let stdin = std::io::stdin();
            execute_browse(store.as_ref(), stdin.lock(), std::io::stdout())?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
