//! Command-line surface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use babykit_core::ItemId;

#[derive(Debug, Parser)]
#[command(name = "babykit", version, about = "Keep track of diapers, formula, and other baby essentials")]
pub struct Cli {
    /// Directory holding the inventory (defaults to the OS data directory).
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Print machine-readable JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show every item with its stock status.
    List,
    /// Add an item. Name, stock and threshold are required.
    Add(AddArgs),
    /// Edit an item; omitted fields keep their current value.
    Edit(EditArgs),
    /// Record a new stock count.
    SetStock {
        id: ItemId,
        quantity: u32,
    },
    /// Remove an item.
    Delete {
        id: ItemId,
    },
    /// Show out-of-stock and low-stock items.
    Alerts,
    /// Show what to buy and how much.
    Shopping,
    /// List the supply categories.
    Categories,
}

/// Fields of the add form, as raw text.
#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(long, default_value = "")]
    pub name: String,
    #[arg(long, default_value = "diapers")]
    pub category: String,
    #[arg(long = "stock", default_value = "", allow_hyphen_values = true)]
    pub current_stock: String,
    #[arg(long = "threshold", default_value = "", allow_hyphen_values = true)]
    pub min_threshold: String,
    #[arg(long, default_value = "pieces")]
    pub unit: String,
    #[arg(long, default_value = "")]
    pub notes: String,
}

#[derive(Debug, Args)]
pub struct EditArgs {
    pub id: ItemId,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long = "stock", allow_hyphen_values = true)]
    pub current_stock: Option<String>,
    #[arg(long = "threshold", allow_hyphen_values = true)]
    pub min_threshold: Option<String>,
    #[arg(long)]
    pub unit: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
}
