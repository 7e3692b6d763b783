use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(
    author,
    version,
    about = "Create an index of JSON files with their addresses"
)]
pub struct Cli {
    /// Base URL prefixed to each relative path (overrides presets and the built-in default)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Output index file path, relative to the root unless absolute [default: files.index.json]
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Root directory to scan [default: the project root enclosing this tool]
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Use a predefined set of options from presets.toml
    #[arg(long)]
    pub preset: Option<String>,

    /// Patterns for relative paths to leave out of the index (e.g., 'node_modules/**')
    #[arg(long, num_args = 1..)]
    pub exclude: Option<Vec<String>>,
}
