use super::types::RowSlot;
use crate::error::{KeyboardError, Result};

/// Per-row key counts, top row first. The last row holds the wide keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowTable {
    rows: Vec<usize>,
    key_count: usize,
}

impl RowTable {
    pub fn new(rows: Vec<usize>, key_count: usize) -> Result<Self> {
        if rows.is_empty() {
            return Err(KeyboardError::InvalidRowTable {
                message: "row table is empty".to_string(),
            });
        }
        if let Some(row) = rows.iter().position(|&len| len == 0) {
            return Err(KeyboardError::InvalidRowTable {
                message: format!("row {row} has no keys"),
            });
        }

        let before_last: usize = rows[..rows.len() - 1].iter().sum();
        let slots: usize = rows.iter().sum();
        // the last row must receive at least one key
        if key_count <= before_last || key_count > slots {
            return Err(KeyboardError::InvalidRowTable {
                message: format!(
                    "key count {key_count} must be in ({before_last}, {slots}] for rows {rows:?}"
                ),
            });
        }

        Ok(Self { rows, key_count })
    }

    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    pub fn key_count(&self) -> usize {
        self.key_count
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Row of `index` and the number of keys placed before it.
    ///
    /// Keys in the bottom row pull `keys_placed` back by `offset_factor` per
    /// preceding key in that row, so the few wide keys spread across the
    /// whole row instead of bunching at its start.
    pub fn resolve(&self, index: usize, offset_factor: f64) -> Result<RowSlot> {
        if index >= self.key_count {
            return Err(KeyboardError::KeyIndexOutOfRange {
                index,
                count: self.key_count,
            });
        }
        Ok(self.locate(index, offset_factor))
    }

    /// `resolve` without the range check; `index` must be below `key_count`.
    pub(super) fn locate(&self, index: usize, offset_factor: f64) -> RowSlot {
        let mut row = 0;
        let mut keys_placed = 0.0;
        let mut cumulative = 0;
        for &len in &self.rows[..self.rows.len() - 1] {
            cumulative += len;
            if index >= cumulative {
                keys_placed += len as f64;
                row += 1;
            }
        }

        if index >= cumulative {
            keys_placed -= (index - cumulative) as f64 * offset_factor;
        }

        RowSlot {
            row,
            row_len: self.rows[row],
            keys_placed,
        }
    }
}
