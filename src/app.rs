// Declare modules
pub mod cli;
pub mod config;
pub mod formatter;
pub mod models;
pub mod scanner;

use anyhow::{Context, Result};
use clap::Parser;
use std::env;

use self::cli::Cli;
use self::config::{load_presets_file, resolve_config};
use self::formatter::OutputGenerator;
use self::models::{IndexEntry, RuntimeConfig};
use self::scanner::Scanner;

/// Scans the configured root and returns the sorted index, without writing it.
pub fn build_index(config: &RuntimeConfig) -> Result<Vec<IndexEntry>> {
    let scanner = Scanner::new(config)?;
    let files = scanner.scan()?;
    Ok(OutputGenerator::build_entries(&files, &config.base_url))
}

/// Builds the index and overwrites the output file. Returns the entry count.
pub fn write_index(config: &RuntimeConfig) -> Result<usize> {
    let entries = build_index(config)?;

    if entries.is_empty() {
        log::warn!("No files matching {} under {:?}", scanner::FILE_PATTERN, config.root);
    }

    OutputGenerator::write_index(&config.output, &entries)
}

/// Initializes components and orchestrates data flow.
pub fn run() -> Result<()> {
    // 1. Parse Args
    let args = Cli::parse();

    // 2. Preset auto-detection uses the name of the current folder
    let current_dir = env::current_dir().context("Failed to get current directory")?;
    let project_name = current_dir.file_name().and_then(|n| n.to_str());

    // 3. Resolve Configuration
    let presets = load_presets_file()?;
    let config = resolve_config(args, &presets, project_name)?;

    // 4. Scan, sort, write
    let count = write_index(&config)?;

    // 5. Confirm
    println!("Wrote {} entries to {}", count, config.output.display());

    Ok(())
}
