//! cyrlat - Russian-to-Latin transliteration filter.
//!
//! Reads all of standard input, transliterates it, and writes the result
//! plus a single trailing newline to standard output. No flags, no
//! arguments; any failure exits with status 1.

use std::io::{self, Read, Write};

use cyrlat::error::Result;
use cyrlat::transliterate;

/// Source script for every invocation.
const SOURCE_LANG: &str = "ru";
/// Target script for every invocation.
const TARGET_LANG: &str = "en";

fn main() {
    // error/warn only unless RUST_LOG says otherwise
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        log::error!("transliteration failed: {}", e);
        std::process::exit(1);
    }
}

/// Read stdin to completion, transform, write stdout.
fn run() -> Result<()> {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;

    let output = pipeline(&input)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Pipeline body, separated from process I/O so it is testable: transform
/// plus the trailing-newline rule (exactly one, never two).
fn pipeline(input: &str) -> Result<String> {
    let mut output = transliterate(input, SOURCE_LANG, TARGET_LANG)?;
    if !output.ends_with('\n') {
        output.push('\n');
    }
    Ok(output)
}
