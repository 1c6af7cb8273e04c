// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Dense Stirling tables.
//!
//! A [`Table`] is an `N x K` row-major array of one kind's values, fully
//! populated at construction and read-only afterwards. Cell `(i, j)` only
//! depends on row `i - 1`, so tables are filled by increasing row.
//!
//! Tables require `N >= K`: only the lower triangle carries non-trivial
//! values, and requests with more columns than rows are rejected with a
//! [`TableError`] before any computation.

pub mod constants;
pub mod errors;

pub use constants::{default_table, matrix, DEFAULT_COLS, DEFAULT_ROWS, FIRST_KIND, SECOND_KIND};
pub use errors::TableError;

use log::debug;

use crate::memo::TriangleMemo;
use crate::recurrence::Kind;
use errors::validate_dimensions;

/// A dense `N x K` table of one kind's Stirling values, stored row-major.
///
/// Every constructor computes the values itself from the recurrence, so
/// cell `(i, j)` always equals `kind.evaluate(i, j)` and `N >= K > 0`.
///
/// # Memory
///
/// - Size: `N * K * 8` bytes on the heap, 800 bytes for the default 10x10
/// - Immutable after construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    kind: Kind,
    rows: usize,
    cols: usize,
    cells: Vec<u64>,
}

impl Table {
    /// Build an `n x k` table of `kind`.
    ///
    /// # Errors
    ///
    /// [`TableError::EmptyDimension`] if either dimension is zero,
    /// [`TableError::ColumnsExceedRows`] if `n < k`.
    pub fn build(kind: Kind, n: usize, k: usize) -> Result<Self, TableError> {
        validate_dimensions(n, k)?;

        let memo = TriangleMemo::new(kind, n - 1);
        let table = Self::from_fn(kind, n, k, |i, j| memo.get(i, j))?;

        debug!("[Table] Built {} table {}x{}", kind, n, k);

        Ok(table)
    }

    /// An `N x K` table evaluated by the `const fn` [`matrix`].
    ///
    /// Fails to compile unless `N >= K > 0`:
    ///
    /// ```compile_fail
    /// use stirling_tables::{Kind, Table};
    /// let wide = Table::compiled::<3, 5>(Kind::SecondKind);
    /// ```
    ///
    /// ```compile_fail
    /// use stirling_tables::{Kind, Table};
    /// let empty = Table::compiled::<3, 0>(Kind::FirstKind);
    /// ```
    pub fn compiled<const N: usize, const K: usize>(kind: Kind) -> Self {
        Self::lift(kind, &matrix::<N, K>(kind))
    }

    /// Fill cell `(i, j)` with `f(i, j)`. Cells are independent of one
    /// another, so they may be visited in any order.
    fn from_fn<F>(kind: Kind, n: usize, k: usize, f: F) -> Result<Self, TableError>
    where
        F: Fn(usize, usize) -> u64,
    {
        validate_dimensions(n, k)?;

        let cells = (0..n)
            .flat_map(|i| (0..k).map(move |j| (i, j)))
            .map(|(i, j)| f(i, j))
            .collect();

        Ok(Self {
            kind,
            rows: n,
            cols: k,
            cells,
        })
    }

    /// Copy a matrix produced by [`matrix`] for the same `kind`.
    fn lift<const N: usize, const K: usize>(kind: Kind, m: &[[u64; K]; N]) -> Self {
        const { assert!(N >= K && K > 0, "N must be at least K, and K positive") };

        Self {
            kind,
            rows: N,
            cols: K,
            cells: m.iter().flatten().copied().collect(),
        }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Value at row `i`, column `j`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows` or `j >= cols`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> u64 {
        assert!(
            i < self.rows && j < self.cols,
            "Cell out of range: ({}, {}) in {}x{} table",
            i,
            j,
            self.rows,
            self.cols
        );
        self.cells[i * self.cols + j]
    }

    /// All `cols` values of row `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows`.
    pub fn row(&self, i: usize) -> &[u64] {
        assert!(
            i < self.rows,
            "Row out of range: {} in {}x{} table",
            i,
            self.rows,
            self.cols
        );
        let start = i * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// The displayed part of row `i`: columns `0..=i`, clipped to `cols`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows`.
    pub fn triangle_row(&self, i: usize) -> &[u64] {
        let width = (i + 1).min(self.cols);
        &self.row(i)[..width]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[u64]> + '_ {
        self.cells.chunks_exact(self.cols)
    }
}
