use serde::Serialize;
use std::path::PathBuf;

/// Represents the final configuration after merging presets and CLI args.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Canonical, absolute directory to scan.
    pub root: PathBuf,
    /// Absolute location of the index file.
    pub output: PathBuf,
    /// Normalized base URL (ends with `/`), or empty for relative addresses.
    pub base_url: String,
    pub exclude: Vec<String>,
}

/// A single record of the index. Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct IndexEntry {
    pub name: String,
    pub address: String,
}

/// A file discovered during the scan, before its address is computed.
#[derive(Debug)]
pub struct FileEntry {
    pub name: String,
    pub relative_path: String, // Always '/'-separated
}
