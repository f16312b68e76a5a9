// Copyright (c) 2025 - Cowboy AI, Inc.
//! Rack description checker
//!
//! Validates a rack description file and prints every device's cabling,
//! grouped by rack and slot. Exits with status 1 if the file is not valid.
//!
//! Run with: cargo run --bin dc-check -- racks.yaml

use anyhow::Result;
use clap::Parser;
use dc_check::pprint::check_file;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "dc-check", about = "Validate a rack description and show its connections")]
struct Args {
    /// Rack description file (YAML)
    filename: PathBuf,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let output = check_file(&args.filename)?;
    print!("{}", output.text);

    Ok(output.exit_code())
}
