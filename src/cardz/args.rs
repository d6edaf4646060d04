use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cardz")]
#[command(about = "Card inventory manager with remote catalog sync", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (defaults to the platform data dir)
    #[arg(long, global = true)]
    pub dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the owned-card inventory
    #[command(alias = "ls")]
    List {
        /// Filter by name, type, or set
        #[arg(short, long)]
        filter: Option<String>,
    },

    /// Add a card to the inventory
    Add {
        /// Catalog id (e.g. base1-4)
        id: String,

        /// Card name
        name: String,

        #[arg(short, long, default_value = "N/A")]
        card_type: String,

        #[arg(short, long, default_value = "Common")]
        rarity: String,

        #[arg(short, long, default_value = "")]
        set: String,

        #[arg(short, long, default_value_t = 1)]
        quantity: u32,

        #[arg(short, long, default_value = "")]
        image_url: String,
    },

    /// Remove a card from the inventory by id
    #[command(alias = "rm")]
    Remove {
        /// Catalog id of the card to remove
        id: String,
    },

    /// Search the remote catalog by name prefix
    Search {
        /// Name prefix (matched with a trailing wildcard)
        query: String,

        /// Search the local cache instead of the remote catalog
        #[arg(long)]
        cached: bool,
    },

    /// Refresh the reference cache from the remote catalog
    Sync {
        /// On network failure, seed the cache with the built-in sample set
        #[arg(long)]
        seed_on_failure: bool,
    },

    /// Rebuild the reference cache from the local bulk dataset
    Import,

    /// Merge a flat CSV file into the inventory
    ImportCsv {
        /// Path of the CSV file to merge
        path: PathBuf,
    },

    /// Export the inventory as CSV
    Export {
        /// Output path (defaults to cardz-<timestamp>.csv)
        path: Option<PathBuf>,
    },
}
