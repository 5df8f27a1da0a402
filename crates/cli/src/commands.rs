//! Command execution: one branch per user intent.
//!
//! Operations on an unknown id and refused input change nothing and exit with
//! status 1 after a note on stderr. Storage failures are errors.

use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use serde::Serialize;

use babykit_core::ItemId;
use babykit_infra::{
    FileKeyValueStore, InventoryError, InventoryManager, InventoryStore, KeyValueInventoryStore,
};
use babykit_inventory::{Category, Item, ItemForm};

use crate::cli::{AddArgs, Cli, Command, EditArgs};
use crate::config::Config;
use crate::render;

const SAVE_FAILED: &str = "failed to save inventory";

/// How a command ended when storage worked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    /// Input was refused or the id is unknown; nothing was written.
    Unchanged,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Done => ExitCode::SUCCESS,
            Outcome::Unchanged => ExitCode::FAILURE,
        }
    }
}

/// Open the on-disk inventory described by `config` and run the parsed command.
pub fn execute(
    cli: &Cli,
    config: &Config,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> anyhow::Result<Outcome> {
    let store = KeyValueInventoryStore::new(FileKeyValueStore::new(&config.data_dir));
    let mut manager = InventoryManager::open(store).with_context(|| {
        format!("failed to load inventory from {}", config.data_dir.display())
    })?;
    run(&mut manager, &cli.command, cli.json, out, err)
}

pub fn run<S: InventoryStore>(
    manager: &mut InventoryManager<S>,
    command: &Command,
    json: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> anyhow::Result<Outcome> {
    match command {
        Command::List => {
            let snapshot = manager.snapshot();
            if json {
                write_json(out, &snapshot)?;
            } else {
                render::items(out, &snapshot)?;
            }
        }
        Command::Add(args) => {
            let form = add_form(args);
            let Some(id) = manager.submit_new(&form).context(SAVE_FAILED)? else {
                if form.is_incomplete() {
                    writeln!(err, "item not added: --name, --stock and --threshold are required")?;
                } else {
                    writeln!(
                        err,
                        "item not added: check --stock/--threshold (whole numbers) and --category/--unit"
                    )?;
                }
                return Ok(Outcome::Unchanged);
            };
            report_item(manager, &id, "added", json, out)?;
        }
        Command::Edit(args) => {
            let Some(current) = manager.get(&args.id) else {
                return not_found(err, &args.id);
            };
            let form = edit_form(current, args);
            match manager.submit_edit(&args.id, &form) {
                Ok(true) => report_item(manager, &args.id, "updated", json, out)?,
                Ok(false) => return not_found(err, &args.id),
                Err(InventoryError::Domain(e)) => {
                    writeln!(err, "item not updated: {e}")?;
                    return Ok(Outcome::Unchanged);
                }
                Err(InventoryError::Store(e)) => return Err(e).context(SAVE_FAILED),
            }
        }
        Command::SetStock { id, quantity } => {
            if !manager.set_stock(id, *quantity).context(SAVE_FAILED)? {
                return not_found(err, id);
            }
            report_item(manager, id, "updated", json, out)?;
        }
        Command::Delete { id } => {
            let name = manager.get(id).map(|i| i.name().to_string());
            if !manager.delete_item(id).context(SAVE_FAILED)? {
                return not_found(err, id);
            }
            if json {
                write_json(out, &Deleted { deleted: *id })?;
            } else {
                writeln!(out, "Deleted {} ({id})", name.unwrap_or_default())?;
            }
        }
        Command::Alerts => {
            let snapshot = manager.snapshot();
            if json {
                write_json(
                    out,
                    &Alerts {
                        out_of_stock: &snapshot.out_of_stock,
                        low_stock: &snapshot.low_stock,
                    },
                )?;
            } else {
                render::alerts(out, &snapshot)?;
            }
        }
        Command::Shopping => {
            let snapshot = manager.snapshot();
            if json {
                write_json(out, &snapshot.shopping_list)?;
            } else {
                render::shopping(out, &snapshot.shopping_list)?;
            }
        }
        Command::Categories => {
            if json {
                let rows: Vec<CategoryRow> = Category::ALL
                    .iter()
                    .map(|c| CategoryRow {
                        id: c.code().to_string(),
                        name: c.label(),
                        icon: c.icon(),
                    })
                    .collect();
                write_json(out, &rows)?;
            } else {
                render::categories(out)?;
            }
        }
    }
    Ok(Outcome::Done)
}

#[derive(Serialize)]
struct Deleted {
    deleted: ItemId,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Alerts<'a, T: Serialize> {
    out_of_stock: &'a [T],
    low_stock: &'a [T],
}

#[derive(Serialize)]
struct CategoryRow {
    id: String,
    name: &'static str,
    icon: &'static str,
}

fn add_form(args: &AddArgs) -> ItemForm {
    ItemForm {
        name: args.name.clone(),
        category: args.category.clone(),
        current_stock: args.current_stock.clone(),
        min_threshold: args.min_threshold.clone(),
        unit: args.unit.clone(),
        notes: args.notes.clone(),
    }
}

/// Edit form pre-filled from the record, with the given flags applied on top.
fn edit_form(current: &Item, args: &EditArgs) -> ItemForm {
    let mut form = ItemForm::from_item(current);
    let overrides = [
        (&mut form.name, &args.name),
        (&mut form.category, &args.category),
        (&mut form.current_stock, &args.current_stock),
        (&mut form.min_threshold, &args.min_threshold),
        (&mut form.unit, &args.unit),
        (&mut form.notes, &args.notes),
    ];
    for (field, value) in overrides {
        if let Some(value) = value {
            *field = value.clone();
        }
    }
    form
}

fn report_item<S: InventoryStore>(
    manager: &InventoryManager<S>,
    id: &ItemId,
    verb: &str,
    json: bool,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let item = manager
        .get(id)
        .with_context(|| format!("item {id} missing after it was {verb}"))?;
    if json {
        write_json(out, item)?;
    } else {
        writeln!(
            out,
            "{} {} {verb}: {} {} ({})",
            item.category().icon(),
            item.name(),
            item.current_stock(),
            item.unit(),
            item.status()
        )?;
        writeln!(out, "    id: {id}")?;
    }
    Ok(())
}

fn not_found(err: &mut dyn Write, id: &ItemId) -> anyhow::Result<Outcome> {
    writeln!(err, "no item with id {id}")?;
    Ok(Outcome::Unchanged)
}

fn write_json<T: Serialize + ?Sized>(out: &mut dyn Write, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).context("failed to write JSON output")?;
    writeln!(out)?;
    Ok(())
}
