// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compile-time Stirling tables.
//!
//! [`matrix`] is a `const fn`, so the default tables printed by the
//! `stirling` binary are evaluated entirely by the compiler:
//!
//! ```
//! use stirling_tables::table::constants::{SECOND_KIND, DEFAULT_ROWS};
//! assert_eq!(SECOND_KIND[4][2], 7);
//! assert_eq!(SECOND_KIND.len(), DEFAULT_ROWS);
//! ```

use crate::recurrence::Kind;
use crate::table::Table;

/// Rows in the default printed tables.
pub const DEFAULT_ROWS: usize = 10;

/// Columns in the default printed tables.
pub const DEFAULT_COLS: usize = 10;

const _: () = assert!(DEFAULT_ROWS >= DEFAULT_COLS, "DEFAULT_ROWS must be at least DEFAULT_COLS");
const _: () = assert!(DEFAULT_COLS > 0, "DEFAULT_COLS must be positive");

/// An `N x K` table of `kind`, evaluated at compile time when used in a
/// `const` context.
///
/// Fails to compile unless `N >= K > 0`.
pub const fn matrix<const N: usize, const K: usize>(kind: Kind) -> [[u64; K]; N] {
    const { assert!(N >= K && K > 0, "N must be at least K, and K positive") };

    let mut m = [[0u64; K]; N];
    let mut i = 0;
    while i < N {
        let mut j = 0;
        while j < K {
            m[i][j] = if i == 0 && j == 0 {
                1
            } else if i == 0 || j == 0 {
                0
            } else {
                kind.step(i as u64, j as u64, m[i - 1][j], m[i - 1][j - 1])
            };
            j += 1;
        }
        i += 1;
    }
    m
}

/// Stirling numbers of the first kind, rows and columns `0..10`.
pub const FIRST_KIND: [[u64; DEFAULT_COLS]; DEFAULT_ROWS] = matrix(Kind::FirstKind);

/// Stirling numbers of the second kind, rows and columns `0..10`.
pub const SECOND_KIND: [[u64; DEFAULT_COLS]; DEFAULT_ROWS] = matrix(Kind::SecondKind);

/// The precomputed default table for `kind`.
pub fn default_table(kind: Kind) -> Table {
    match kind {
        Kind::FirstKind => Table::lift(kind, &FIRST_KIND),
        Kind::SecondKind => Table::lift(kind, &SECOND_KIND),
    }
}
