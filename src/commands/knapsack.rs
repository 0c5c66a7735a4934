//! `pathfind knapsack`: 0/1 knapsack over items given on the command line

use pathfind_core::error::Result;
use pathfind_core::format::OutputFormat;
use pathfind_core::knapsack::{self, Item};

use super::dispatch::CommandContext;

pub fn execute(ctx: &CommandContext, specs: &[(i64, i64)], capacity: i64, select: bool) -> Result<()> {
    let items = specs
        .iter()
        .map(|&(weight, value)| Item::new(weight, value))
        .collect::<Result<Vec<_>>>()?;

    let value = knapsack::solve(&items, capacity)?;
    let selected = if select {
        Some(knapsack::select(&items, capacity)?)
    } else {
        None
    };

    match ctx.format() {
        OutputFormat::Human => {
            println!("Best value: {}", value);
            if let Some(selected) = &selected {
                let weight: u64 = selected.iter().map(|&i| items[i].weight).sum();
                println!("Selected items: {}", join_indices(selected, ", "));
                if !ctx.cli.quiet {
                    println!("Total weight: {} of {}", weight, capacity);
                }
            }
        }
        OutputFormat::Json => {
            let mut json = serde_json::json!({
                "capacity": capacity,
                "items": items,
                "value": value,
            });
            if let Some(selected) = &selected {
                json["selected"] = serde_json::json!(selected);
            }
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Records => {
            println!("H pathfind=1 records=1 mode=knapsack");
            let mut line = format!("K capacity={} items={} value={}", capacity, items.len(), value);
            if let Some(selected) = &selected {
                line.push_str(&format!(" selected={}", join_indices(selected, ",")));
            }
            println!("{}", line);
        }
    }
    Ok(())
}

fn join_indices(indices: &[usize], separator: &str) -> String {
    indices
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}
