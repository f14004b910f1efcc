//! Pagefile - save and load titled pages as plain files

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = pagefile::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
