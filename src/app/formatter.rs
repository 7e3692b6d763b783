use crate::app::models::{FileEntry, IndexEntry};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub struct OutputGenerator;

impl OutputGenerator {
    /// Turns scanned files into index entries ordered by name, then address.
    pub fn build_entries(files: &[FileEntry], base_url: &str) -> Vec<IndexEntry> {
        let mut entries: Vec<IndexEntry> = files
            .iter()
            .map(|file| IndexEntry {
                name: file.name.clone(),
                address: Self::address_for(&file.relative_path, base_url),
            })
            .collect();

        // Derived Ord compares name first, then address
        entries.sort();
        entries
    }

    /// `base_url` must already be normalized (empty or ending in '/').
    pub fn address_for(relative_path: &str, base_url: &str) -> String {
        if base_url.is_empty() {
            relative_path.to_string()
        } else {
            format!("{}{}", base_url, encode_path(relative_path))
        }
    }

    pub fn render(entries: &[IndexEntry]) -> Result<String> {
        let mut json = serde_json::to_string_pretty(entries).context("Failed to serialize index")?;
        json.push('\n');
        Ok(json)
    }

    /// Truncates and rewrites the index file, creating parent directories.
    pub fn write_index(path: &Path, entries: &[IndexEntry]) -> Result<usize> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .context(format!("Failed to create output directory {:?}", parent))?;
        }

        let json = Self::render(entries)?;
        fs::write(path, json).context(format!("Failed to write index to {:?}", path))?;

        Ok(entries.len())
    }
}

/// Percent-encodes every segment of a '/'-separated path, keeping the separators.
pub fn encode_path(relative_path: &str) -> String {
    relative_path
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
