// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Lower-triangular memo of one Stirling kind.
//!
//! # Layout
//!
//! Row `n` has `n + 1` cells and starts at offset `n(n+1)/2` in a single
//! flat `Vec<u64>`. The whole triangle for `max_n` therefore occupies
//! `(max_n+1)(max_n+2)/2` cells.

use log::debug;

use crate::recurrence::Kind;

/// Offset of the first cell of row `n`.
#[inline]
const fn row_start(n: usize) -> usize {
    n * (n + 1) / 2
}

/// Precomputed values of one kind for every `(n, k)` with `k <= n <= max_n`.
///
/// # Memory
///
/// - Size: `(max_n+1)(max_n+2)/2` cells of 8 bytes, 440 bytes for `max_n = 9`
/// - Stored on heap via Vec
/// - Immutable after initialization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriangleMemo {
    kind: Kind,
    max_n: usize,
    cells: Vec<u64>,
}

impl TriangleMemo {
    /// Precompute rows `0..=max_n` of `kind`.
    ///
    /// Each row is derived from the previous one, so every cell is computed
    /// exactly once.
    pub fn new(kind: Kind, max_n: usize) -> Self {
        let mut cells = Vec::with_capacity(row_start(max_n + 1));
        cells.push(1);

        for n in 1..=max_n {
            let prev = row_start(n - 1);
            cells.push(0);
            for k in 1..=n {
                let above = if k < n { cells[prev + k] } else { 0 };
                let above_left = cells[prev + k - 1];
                cells.push(kind.step(n as u64, k as u64, above, above_left));
            }
        }

        debug!(
            "[TriangleMemo] {} rows 0..={} ({} cells)",
            kind,
            max_n,
            cells.len()
        );

        Self { kind, max_n, cells }
    }

    /// The kind this memo was built for.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Largest row held.
    pub fn max_n(&self) -> usize {
        self.max_n
    }

    /// Value at `(n, k)`; zero when `k > n`.
    ///
    /// # Panics
    ///
    /// Panics if `n > max_n`.
    #[inline]
    pub fn get(&self, n: usize, k: usize) -> u64 {
        assert!(
            n <= self.max_n,
            "Row out of range: {} (max {})",
            n,
            self.max_n
        );
        if k > n {
            0
        } else {
            self.cells[row_start(n) + k]
        }
    }

    /// Columns `0..=n` of row `n`.
    ///
    /// # Panics
    ///
    /// Panics if `n > max_n`.
    pub fn row(&self, n: usize) -> &[u64] {
        assert!(
            n <= self.max_n,
            "Row out of range: {} (max {})",
            n,
            self.max_n
        );
        &self.cells[row_start(n)..row_start(n + 1)]
    }

    /// Number of cells held.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: row 0 is always present.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_memo_size() {
        let memo = TriangleMemo::new(Kind::SecondKind, 9);
        assert_eq!(memo.len(), 55);
        assert!(!memo.is_empty());
        assert_eq!(memo.max_n(), 9);
        assert_eq!(memo.kind(), Kind::SecondKind);
    }

    #[test]
    fn test_memo_matches_evaluate() {
        for kind in Kind::iter() {
            let memo = TriangleMemo::new(kind, 25);
            for n in 0..=25 {
                for k in 0..=26 {
                    assert_eq!(memo.get(n, k), kind.evaluate(n, k), "{} ({}, {})", kind, n, k);
                }
            }
        }
    }

    #[test]
    fn test_memo_rows() {
        let memo = TriangleMemo::new(Kind::FirstKind, 6);
        assert_eq!(memo.row(0), &[1]);
        assert_eq!(memo.row(1), &[0, 1]);
        assert_eq!(memo.row(4), &[0, 6, 11, 6, 1]);
        assert_eq!(memo.row(6).len(), 7);
    }

    #[test]
    fn test_memo_past_diagonal_is_zero() {
        let memo = TriangleMemo::new(Kind::SecondKind, 4);
        assert_eq!(memo.get(4, 2), 7);
        assert_eq!(memo.get(4, 9), 0);
    }

    #[test]
    #[should_panic(expected = "Row out of range")]
    fn test_memo_row_out_of_range() {
        let memo = TriangleMemo::new(Kind::FirstKind, 3);
        memo.get(4, 1);
    }

    #[test]
    fn test_memo_zero_rows() {
        let memo = TriangleMemo::new(Kind::FirstKind, 0);
        assert_eq!(memo.len(), 1);
        assert_eq!(memo.get(0, 0), 1);
    }
}
