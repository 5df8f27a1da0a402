//! Text rendering of inventory views.

use std::io::{self, Write};

use babykit_inventory::{Category, InventorySnapshot, ItemView, ShoppingListEntry};

pub fn items(out: &mut dyn Write, snapshot: &InventorySnapshot) -> io::Result<()> {
    if snapshot.is_empty() {
        writeln!(out, "No items in inventory. Start tracking with `babykit add`.")?;
        return Ok(());
    }

    for view in &snapshot.items {
        item(out, view)?;
    }
    Ok(())
}

fn item(out: &mut dyn Write, view: &ItemView) -> io::Result<()> {
    let item = &view.item;
    let unit = item.unit();
    writeln!(
        out,
        "{} {} [{}] - {}",
        item.category().icon(),
        item.name(),
        item.category().label(),
        view.status
    )?;
    writeln!(
        out,
        "    stock: {} {unit}, min: {} {unit}",
        item.current_stock(),
        item.min_threshold()
    )?;
    if let Some(notes) = item.notes() {
        writeln!(out, "    \"{notes}\"")?;
    }
    writeln!(out, "    id: {}", item.id_typed())
}

pub fn alerts(out: &mut dyn Write, snapshot: &InventorySnapshot) -> io::Result<()> {
    if !snapshot.has_alerts() {
        writeln!(out, "All stocked up.")?;
        return Ok(());
    }

    if !snapshot.out_of_stock.is_empty() {
        writeln!(out, "Out of Stock ({} items)", snapshot.out_of_stock.len())?;
        for view in &snapshot.out_of_stock {
            writeln!(out, "  - {}", view.item.name())?;
        }
    }
    if !snapshot.low_stock.is_empty() {
        writeln!(out, "Low Stock Alert ({} items)", snapshot.low_stock.len())?;
        for view in &snapshot.low_stock {
            writeln!(out, "  - {} ({} left)", view.item.name(), view.item.current_stock())?;
        }
    }
    Ok(())
}

pub fn shopping(out: &mut dyn Write, list: &[ShoppingListEntry]) -> io::Result<()> {
    if list.is_empty() {
        writeln!(out, "Nothing to buy.")?;
        return Ok(());
    }

    writeln!(out, "Shopping List")?;
    let width = list.iter().map(|e| e.name.chars().count()).max().unwrap_or(0);
    for entry in list {
        writeln!(
            out,
            "  {:<width$}  Need: {} {}",
            entry.name, entry.quantity, entry.unit
        )?;
    }
    Ok(())
}

pub fn categories(out: &mut dyn Write) -> io::Result<()> {
    for category in Category::ALL {
        writeln!(out, "{} {:<9} {}", category.icon(), category.code(), category.label())?;
    }
    Ok(())
}
