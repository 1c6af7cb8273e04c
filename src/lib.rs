// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Triangular tables of Stirling numbers.
//!
//! # Kinds
//!
//! - **First kind** `s(n, k)`: permutations of `n` elements with exactly `k` cycles.
//! - **Second kind** `S(n, k)`: partitions of an `n`-set into exactly `k` non-empty blocks.
//!
//! # Architecture
//!
//! - [`recurrence`]: pure evaluators for a single `(n, k)`, plus the Bell
//!   number as a row-sum identity
//! - [`memo`]: an immutable lower-triangular array of one kind, filled once
//!   row by row
//! - [`table`]: dense `N x K` tables (`N >= K`), both at runtime via
//!   [`Table::build`] and at compile time via the `const fn` [`table::matrix`]
//! - [`present`]: the text format printed by the `stirling` binary
//!
//! All values are `u64` and wrap silently on overflow.
//!
//! # Example
//!
//! ```
//! use stirling_tables::{Kind, Table};
//!
//! let table = Table::build(Kind::SecondKind, 5, 5).unwrap();
//! assert_eq!(table.get(4, 2), 7);
//! assert!(Table::build(Kind::SecondKind, 3, 5).is_err());
//! ```

pub mod memo;
pub mod present;
pub mod recurrence;
pub mod table;

// Re-export commonly used types
pub use memo::TriangleMemo;
pub use recurrence::{bell, stirling1, stirling2, Kind};
pub use table::{Table, TableError};
