//! Owned two-dimensional buffer
//!
//! A `Matrix<T>` owns every cell in a single row-major allocation, so all rows
//! are released together when the matrix is dropped. Construction is checked
//! against [`MAX_CELLS`] before anything is allocated.

use std::ops::{Index, IndexMut};

use crate::error::{PathfindError, Result};

/// Upper bound on `rows * cols` for any matrix (128 MiB of `u64` cells)
pub const MAX_CELLS: usize = 1 << 24;

/// `rows * cols`, or `InvalidValue` if it overflows or exceeds [`MAX_CELLS`]
pub fn cell_count(rows: usize, cols: usize) -> Result<usize> {
    rows.checked_mul(cols)
        .filter(|&cells| cells <= MAX_CELLS)
        .ok_or_else(|| {
            PathfindError::invalid_value(
                "matrix size",
                format!("{rows}x{cols} (limit is {MAX_CELLS} cells)"),
            )
        })
}

/// Row-major `rows x cols` buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T: Default + Clone> Matrix<T> {
    /// Allocate a matrix with every cell set to `T::default()`
    pub fn allocate(rows: usize, cols: usize) -> Result<Self> {
        Self::filled(rows, cols, T::default())
    }
}

impl<T: Clone> Matrix<T> {
    /// Allocate a matrix with every cell set to `value`
    pub fn filled(rows: usize, cols: usize, value: T) -> Result<Self> {
        let cells = cell_count(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            cells: vec![value; cells],
        })
    }
}

impl<T> Matrix<T> {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Bounds-checked cell access
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.cells.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Borrow one row as a slice.
    ///
    /// # Panics
    /// Panics if `row >= self.rows()`.
    pub fn row(&self, row: usize) -> &[T] {
        assert!(row < self.rows, "row {row} out of bounds ({} rows)", self.rows);
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    /// Borrow one row mutably.
    ///
    /// # Panics
    /// Panics if `row >= self.rows()`.
    pub fn row_mut(&mut self, row: usize) -> &mut [T] {
        assert!(row < self.rows, "row {row} out of bounds ({} rows)", self.rows);
        &mut self.cells[row * self.cols..(row + 1) * self.cols]
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        &self.cells[row * self.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        &mut self.cells[row * self.cols + col]
    }
}
