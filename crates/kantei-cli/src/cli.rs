//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use kantei::Category;
use std::path::PathBuf;

/// Kantei: identify unidentified items by shop price
#[derive(Parser)]
#[command(name = "kantei")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the reference catalog for a category
    Catalog {
        /// Category key or in-game label (grass, scroll, staff, bracelet, incense, pot)
        #[arg(value_name = "CATEGORY")]
        category: Category,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Look up a price and the items it could belong to
    Price(PriceArgs),

    /// Replay a tracking session from a JSON script
    Run {
        /// Path to the script file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
#[command(group(clap::ArgGroup::new("price").required(true).args(["buy", "sell"])))]
pub struct PriceArgs {
    /// Observed buy price
    #[arg(long)]
    pub buy: Option<u32>,

    /// Observed sell price
    #[arg(long)]
    pub sell: Option<u32>,

    /// Restrict candidates to one category
    #[arg(short, long)]
    pub category: Option<Category>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
