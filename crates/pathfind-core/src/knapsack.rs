//! 0/1 knapsack
//!
//! Each item is taken at most once. [`solve`] and [`select`] fill a full
//! `(items + 1) x (capacity + 1)` table; [`solve_compact`] keeps a single row.
//! A zero capacity yields 0 without building a table, even for weightless
//! items. A capacity whose table would exceed [`MAX_CELLS`] is rejected as an
//! invalid value before anything is allocated.

use serde::Serialize;

use crate::bail_invalid;
use crate::error::{PathfindError, Result};
use crate::matrix::{cell_count, Matrix, MAX_CELLS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Item {
    pub weight: u64,
    pub value: u64,
}

impl Item {
    /// Fails if either field is negative
    pub fn new(weight: i64, value: i64) -> Result<Self> {
        if weight < 0 {
            bail_invalid!("item weight", weight);
        }
        if value < 0 {
            bail_invalid!("item value", value);
        }
        Ok(Self {
            weight: weight as u64,
            value: value as u64,
        })
    }
}

fn checked_capacity(capacity: i64) -> Result<usize> {
    match usize::try_from(capacity) {
        Ok(capacity) => Ok(capacity),
        Err(_) => bail_invalid!("capacity", capacity),
    }
}

/// Ensure a `rows x (capacity + 1)` table fits under [`MAX_CELLS`]
fn check_table(capacity: usize, rows: usize) -> Result<()> {
    capacity
        .checked_add(1)
        .and_then(|cols| cell_count(rows, cols).ok())
        .map(|_| ())
        .ok_or_else(|| {
            PathfindError::invalid_value(
                "capacity",
                format!("{capacity} (table for {rows} rows would exceed {MAX_CELLS} cells)"),
            )
        })
}

/// Item weight as a table column, or `None` if it can never fit
fn column_weight(item: &Item, capacity: usize) -> Option<usize> {
    usize::try_from(item.weight)
        .ok()
        .filter(|&weight| weight <= capacity)
}

/// `table[(i, w)]` is the best value using the first `i` items within weight `w`
fn fill_table(items: &[Item], capacity: usize) -> Result<Matrix<u64>> {
    check_table(capacity, items.len() + 1)?;
    let mut table = Matrix::<u64>::allocate(items.len() + 1, capacity + 1)?;
    for (index, item) in items.iter().enumerate() {
        let row = index + 1;
        for w in 0..=capacity {
            let skip = table[(row - 1, w)];
            table[(row, w)] = match column_weight(item, w) {
                Some(weight) => skip.max(table[(row - 1, w - weight)].saturating_add(item.value)),
                None => skip,
            };
        }
    }
    Ok(table)
}

/// Best total value of a subset whose weight fits in `capacity`
#[tracing::instrument(skip(items), fields(items = items.len()))]
pub fn solve(items: &[Item], capacity: i64) -> Result<u64> {
    let capacity = checked_capacity(capacity)?;
    if items.is_empty() || capacity == 0 {
        return Ok(0);
    }
    let table = fill_table(items, capacity)?;
    Ok(table[(items.len(), capacity)])
}

/// Same result as [`solve`] using one row of `capacity + 1` cells
pub fn solve_compact(items: &[Item], capacity: i64) -> Result<u64> {
    let capacity = checked_capacity(capacity)?;
    if items.is_empty() || capacity == 0 {
        return Ok(0);
    }
    check_table(capacity, 1)?;
    let mut best = vec![0u64; capacity + 1];
    for item in items {
        let Some(weight) = column_weight(item, capacity) else {
            continue;
        };
        // Descending so each item is counted once
        for w in (weight..=capacity).rev() {
            best[w] = best[w].max(best[w - weight].saturating_add(item.value));
        }
    }
    Ok(best[capacity])
}

/// Indices of one optimal subset, ascending
#[tracing::instrument(skip(items), fields(items = items.len()))]
pub fn select(items: &[Item], capacity: i64) -> Result<Vec<usize>> {
    let capacity = checked_capacity(capacity)?;
    if items.is_empty() || capacity == 0 {
        return Ok(Vec::new());
    }

    let table = fill_table(items, capacity)?;
    let mut selected = Vec::new();
    let mut w = capacity;
    for row in (1..=items.len()).rev() {
        if table[(row, w)] == table[(row - 1, w)] {
            continue;
        }
        // A changed cell means the item was taken, so it fits in `w`
        let Some(weight) = column_weight(&items[row - 1], w) else {
            continue;
        };
        selected.push(row - 1);
        w -= weight;
    }
    selected.reverse();

    tracing::debug!(value = table[(items.len(), capacity)], chosen = selected.len(), "select");
    Ok(selected)
}
