// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Stirling number recurrences.
//!
//! Both kinds share the same base cases and differ only in the multiplier
//! applied to the `(n-1, k)` term:
//!
//! - First kind: `s(n, k) = (n-1)·s(n-1, k) + s(n-1, k-1)`
//! - Second kind: `S(n, k) = k·S(n-1, k) + S(n-1, k-1)`
//!
//! with `s(0, 0) = S(0, 0) = 1` and zero whenever exactly one of `n`, `k`
//! is zero.
//!
//! # Overflow
//!
//! Values are `u64` and all arithmetic wraps. For large `n` the results are
//! the true values reduced modulo 2^64. This is never reported as an error.
//!
//! # Evaluation
//!
//! The naive recursion touches an exponential number of subproblems. Here a
//! single row of `k+1` cells is rolled forward from row 0 to row `n`, which
//! is O(n·k) time and O(k) space.

pub mod identities;

pub use identities::bell;

use strum_macros::{Display, EnumIter};

/// Which Stirling recurrence to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Kind {
    /// Unsigned Stirling numbers of the first kind: permutations of `n`
    /// elements with exactly `k` cycles.
    #[strum(serialize = "first kind")]
    FirstKind,

    /// Stirling numbers of the second kind: partitions of an `n`-set into
    /// exactly `k` non-empty blocks.
    #[strum(serialize = "second kind")]
    SecondKind,
}

impl Kind {
    /// Multiplier on the `(n-1, k)` term when stepping to cell `(n, k)`.
    ///
    /// Only meaningful for `n, k >= 1`.
    #[inline]
    pub const fn coefficient(self, n: u64, k: u64) -> u64 {
        match self {
            Kind::FirstKind => n.wrapping_sub(1),
            Kind::SecondKind => k,
        }
    }

    /// One step of the recurrence: cell `(n, k)` from its two parents in row `n-1`.
    #[inline]
    pub const fn step(self, n: u64, k: u64, above: u64, above_left: u64) -> u64 {
        self.coefficient(n, k)
            .wrapping_mul(above)
            .wrapping_add(above_left)
    }

    /// Evaluate the Stirling number of this kind at `(n, k)`.
    pub fn evaluate(self, n: usize, k: usize) -> u64 {
        if k > n {
            return 0;
        }
        rolling_row(self, n, k)[k]
    }

    /// All values of row `n`, columns `0..=n`.
    pub fn row(self, n: usize) -> Vec<u64> {
        rolling_row(self, n, n)
    }

    /// Header line used when printing a table of this kind.
    pub fn header(self) -> String {
        format!("Stirling numbers of the {}:", self)
    }
}

/// Unsigned Stirling number of the first kind, `s(n, k)`.
///
/// ```
/// use stirling_tables::stirling1;
/// assert_eq!(stirling1(4, 2), 11);
/// assert_eq!(stirling1(5, 3), 35);
/// ```
pub fn stirling1(n: usize, k: usize) -> u64 {
    Kind::FirstKind.evaluate(n, k)
}

/// Stirling number of the second kind, `S(n, k)`.
///
/// ```
/// use stirling_tables::stirling2;
/// assert_eq!(stirling2(4, 2), 7);
/// assert_eq!(stirling2(5, 3), 25);
/// ```
pub fn stirling2(n: usize, k: usize) -> u64 {
    Kind::SecondKind.evaluate(n, k)
}

/// Roll row 0 forward to row `n`, keeping columns `0..=width`.
///
/// Columns are updated right to left so `row[j - 1]` still holds the
/// previous row's value when cell `j` is stepped.
fn rolling_row(kind: Kind, n: usize, width: usize) -> Vec<u64> {
    let mut row = vec![0u64; width + 1];
    row[0] = 1;

    for i in 1..=n {
        let top = i.min(width);
        for j in (1..=top).rev() {
            row[j] = kind.step(i as u64, j as u64, row[j], row[j - 1]);
        }
        row[0] = 0;
    }

    row
}
