//! `babykit` command-line front end.
//!
//! Maps user intents (add, edit, delete, set stock) onto the inventory manager
//! and renders the collection, alerts and shopping list.

pub mod cli;
pub mod commands;
pub mod config;
pub mod render;

pub use cli::Cli;
pub use config::Config;
