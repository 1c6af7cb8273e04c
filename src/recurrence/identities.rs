// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Row-sum identities.
//!
//! Summing a row of the second kind counts every set partition of `n`
//! elements; summing a row of the first kind counts all `n!` permutations.

use super::Kind;

/// The `n`-th Bell number: partitions of an `n`-set into any number of blocks.
///
/// Computed as `Σ_k S(n, k)` with wrapping addition.
///
/// ```
/// use stirling_tables::bell;
/// assert_eq!(bell(4), 15);
/// ```
pub fn bell(n: usize) -> u64 {
    row_sum(Kind::SecondKind, n)
}

fn row_sum(kind: Kind, n: usize) -> u64 {
    kind.row(n)
        .into_iter()
        .fold(0u64, |acc, v| acc.wrapping_add(v))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bell_numbers() {
        let expected = [1, 1, 2, 5, 15, 52, 203, 877, 4140, 21147, 115_975];
        for (n, &b) in expected.iter().enumerate() {
            assert_eq!(bell(n), b, "B({})", n);
        }
    }

    #[test]
    fn test_first_kind_row_sum_is_factorial() {
        let mut f = 1u64;
        for n in 0..=20 {
            if n > 0 {
                f *= n as u64;
            }
            assert_eq!(row_sum(Kind::FirstKind, n), f, "{}!", n);
        }
    }
}
