//! Starter CLI - inspect features and preview project generation

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = starter::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
