use crate::app::models::{FileEntry, RuntimeConfig};
use anyhow::{Context, Result};
use globset::{Glob, GlobMatcher, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use pathdiff::diff_paths;
use std::fs;
use std::path::{Path, PathBuf};

/// File names eligible for the index.
pub const FILE_PATTERN: &str = "*.json";

pub struct Scanner {
    root: PathBuf,
    filter: GlobMatcher,
    exclude_set: GlobSet,
    output: Option<PathBuf>, // Canonical output path, if it already exists
}

impl Scanner {
    pub fn new(config: &RuntimeConfig) -> Result<Self> {
        let filter = Glob::new(FILE_PATTERN)
            .context(format!("Invalid glob pattern: {}", FILE_PATTERN))?
            .compile_matcher();

        Ok(Self {
            root: config.root.clone(),
            filter,
            exclude_set: build_globset(&config.exclude)?,
            output: fs::canonicalize(&config.output).ok(),
        })
    }

    /// Walks the whole tree. Ignore files and hidden-file rules are disabled,
    /// and symlinked directories are not followed. Any walk error aborts.
    pub fn scan(&self) -> Result<Vec<FileEntry>> {
        let mut entries = Vec::new();

        let walker = WalkBuilder::new(&self.root)
            .standard_filters(false)
            .follow_links(false)
            .build();

        for result in walker {
            let entry = result.context(format!("Failed to walk {:?}", self.root))?;
            if let Some(processed) = self.process_entry(entry.path()) {
                entries.push(processed);
            }
        }

        log::debug!("Found {} matching files under {:?}", entries.len(), self.root);
        Ok(entries)
    }

    fn process_entry(&self, path: &Path) -> Option<FileEntry> {
        // Follows symlinks, so links to regular files count as files
        if !path.is_file() {
            return None;
        }

        let name = path.file_name()?.to_string_lossy().to_string();
        if !self.filter.is_match(&name) {
            return None;
        }

        let relative = diff_paths(path, &self.root)?;
        let relative_path = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        if self.exclude_set.is_match(&relative_path) {
            log::debug!("Excluded by pattern: {}", relative_path);
            return None;
        }

        if self.is_output(path) {
            log::debug!("Skipping the index file itself: {}", relative_path);
            return None;
        }

        Some(FileEntry {
            name,
            relative_path,
        })
    }

    fn is_output(&self, path: &Path) -> bool {
        match &self.output {
            Some(output) => fs::canonicalize(path).is_ok_and(|p| &p == output),
            None => false,
        }
    }
}

fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pat in patterns {
        builder.add(Glob::new(pat).context(format!("Invalid glob pattern: {}", pat))?);
    }
    Ok(builder.build()?)
}
