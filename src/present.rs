// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Text output of Stirling tables.
//!
//! Each table is a header line followed by one line per row. Row `i` shows
//! columns `0..=i`, each value followed by a single space.

use std::io::{self, Write};

use strum::IntoEnumIterator;

use crate::recurrence::Kind;
use crate::table::{default_table, Table};

/// Write `table` with its header line.
pub fn write_table<W: Write>(out: &mut W, table: &Table) -> io::Result<()> {
    writeln!(out, "{}", table.kind().header())?;
    for i in 0..table.rows() {
        for value in table.triangle_row(i) {
            write!(out, "{} ", value)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Write the default tables of both kinds, first kind first, separated by a blank line.
pub fn write_all<W: Write>(out: &mut W) -> io::Result<()> {
    for (index, kind) in Kind::iter().enumerate() {
        if index > 0 {
            writeln!(out)?;
        }
        write_table(out, &default_table(kind))?;
    }
    Ok(())
}
