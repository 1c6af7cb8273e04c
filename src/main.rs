// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Print the 10x10 Stirling tables of both kinds.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use log::{debug, error};
use stirling_tables::present;

fn main() -> ExitCode {
    env_logger::init();
    debug!("[stirling] Writing default tables");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match present::write_all(&mut out).and_then(|()| out.flush()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("[stirling] Failed to write tables: {}", e);
            ExitCode::FAILURE
        }
    }
}
