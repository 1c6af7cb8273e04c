// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for table construction.

use thiserror::Error;

/// Rejected table dimensions. Raised before any value is computed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// A table needs at least one row and one column.
    #[error("Table dimensions must be positive: {rows} rows x {cols} columns")]
    EmptyDimension { rows: usize, cols: usize },

    /// Only the lower triangle is of interest, so columns may not exceed rows.
    #[error("Table has more columns than rows: {rows} rows x {cols} columns (need rows >= columns)")]
    ColumnsExceedRows { rows: usize, cols: usize },
}

/// Check requested dimensions.
pub fn validate_dimensions(rows: usize, cols: usize) -> Result<(), TableError> {
    if rows == 0 || cols == 0 {
        return Err(TableError::EmptyDimension { rows, cols });
    }
    if rows < cols {
        return Err(TableError::ColumnsExceedRows { rows, cols });
    }
    Ok(())
}
