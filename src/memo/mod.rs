// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Immutable precomputed Stirling values.
//!
//! A [`TriangleMemo`] holds every value of one kind in the lower triangle
//! `0 <= k <= n <= max_n`. It is filled once, row by row, and never
//! changes afterwards, so it can be shared freely by reference.

pub mod triangle;

pub use triangle::TriangleMemo;
