// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

use stirling_tables::Kind;

/// Direct transcription of the recurrence, without memoization.
///
/// Exponential, so only use it for small `n`. Serves as an independent
/// oracle for the rolling-row and memoized evaluators.
pub fn naive(kind: Kind, n: u64, k: u64) -> u64 {
    match (n, k) {
        (0, 0) => 1,
        (0, _) | (_, 0) => 0,
        _ => {
            let multiplier = match kind {
                Kind::FirstKind => n - 1,
                Kind::SecondKind => k,
            };
            multiplier * naive(kind, n - 1, k) + naive(kind, n - 1, k - 1)
        }
    }
}
