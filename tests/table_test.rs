// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for table construction.

mod common;

use common::naive;
use stirling_tables::table::{default_table, DEFAULT_COLS, DEFAULT_ROWS};
use stirling_tables::{Kind, Table, TableError};
use strum::IntoEnumIterator;

#[test]
fn test_ten_by_ten_tables() {
    for kind in Kind::iter() {
        let table = Table::build(kind, 10, 10).unwrap();
        for i in 0..10 {
            for j in 0..10 {
                assert_eq!(table.get(i, j), naive(kind, i as u64, j as u64));
            }
        }
        assert_eq!(table, default_table(kind));
    }
}

#[test]
fn test_precondition_is_checked() {
    let err = Table::build(Kind::SecondKind, 3, 5).unwrap_err();
    assert_eq!(err, TableError::ColumnsExceedRows { rows: 3, cols: 5 });
    assert!(err.to_string().contains("3 rows x 5 columns"));
}

#[test]
fn test_values_above_diagonal_are_zero() {
    let table = Table::build(Kind::FirstKind, DEFAULT_ROWS, DEFAULT_COLS).unwrap();
    for (i, row) in table.iter_rows().enumerate() {
        for &value in &row[i + 1..] {
            assert_eq!(value, 0);
        }
    }
}

#[test]
fn test_diagonal_is_one() {
    for kind in Kind::iter() {
        let table = Table::build(kind, 10, 10).unwrap();
        for i in 0..10 {
            assert_eq!(table.get(i, i), 1);
        }
    }
}

#[test]
fn test_compiled_table_matches_recurrence() {
    let table = Table::compiled::<10, 4>(Kind::FirstKind);
    assert_eq!(table.rows(), 10);
    assert_eq!(table.cols(), 4);
    for i in 0..10 {
        for j in 0..4 {
            assert_eq!(table.get(i, j), naive(Kind::FirstKind, i as u64, j as u64));
        }
    }
}
