//! The fixed demonstration sequence run by the `stockpile` binary.

use std::io::Write;

use anyhow::Context;

use stockpile_core::{DomainError, ItemName};
use stockpile_infra::InventoryRepository;
use stockpile_inventory::{Inventory, Quantity, StockLog};

/// Load, mutate, print, save, report.
///
/// Domain errors from individual steps are logged and skipped; repository
/// and output errors abort the run.
pub fn run_demo<R, W>(repo: &R, low_stock_threshold: Quantity, out: &mut W) -> anyhow::Result<StockLog>
where
    R: InventoryRepository,
    W: Write,
{
    let mut inventory = repo.load().context("failed to load inventory")?;
    let mut log = StockLog::new();

    warn_on_error("add", "apple", inventory.add_logged("apple", 10, &mut log));
    warn_on_error("add", "banana", inventory.add_logged("banana", 2, &mut log));
    warn_on_error("remove", "apple", inventory.remove("apple", 3));
    warn_on_error("remove", "orange", inventory.remove("orange", 1));

    for entry in &log {
        tracing::debug!(item = %entry.item, quantity = entry.quantity, "{entry}");
    }

    writeln!(out, "Apple stock: {}", inventory.get_quantity("apple"))?;
    writeln!(
        out,
        "Low items: {}",
        format_item_list(&low_stock_names(&inventory, low_stock_threshold))
    )?;

    repo.save(&inventory).context("failed to save inventory")?;
    inventory.report(out)?;

    Ok(log)
}

fn low_stock_names(inventory: &Inventory, threshold: Quantity) -> Vec<&str> {
    inventory
        .low_stock(threshold)
        .into_iter()
        .map(ItemName::as_str)
        .collect()
}

/// Render names as a bracketed list of quoted strings, e.g. `['a', 'b']`.
///
/// Names are single-quoted unless they contain a single quote and no double
/// quote; backslashes and control characters are escaped.
fn format_item_list(names: &[&str]) -> String {
    let quoted: Vec<String> = names.iter().map(|name| quote_item(name)).collect();
    format!("[{}]", quoted.join(", "))
}

fn quote_item(name: &str) -> String {
    let quote = if name.contains('\'') && !name.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(name.len() + 2);
    out.push(quote);
    for c in name.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

fn warn_on_error<T>(op: &str, item: &str, result: Result<T, DomainError>) {
    if let Err(err) = result {
        tracing::warn!(op, item, error = %err, "inventory operation rejected");
    }
}
