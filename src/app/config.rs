use crate::app::cli::Cli;
use crate::app::models::RuntimeConfig;
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Base URL used when neither the CLI nor a preset provides one.
/// e.g. `https://raw.githubusercontent.com/<user>/<repo>/<branch>/`
pub const DEFAULT_BASE_URL: &str = "";

pub const DEFAULT_OUTPUT: &str = "files.index.json";

#[derive(Deserialize, Debug)]
struct PresetsFile {
    #[serde(flatten)]
    presets: HashMap<String, PresetConfig>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct PresetConfig {
    pub root: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub base_url: Option<String>,
    pub exclude: Option<Vec<String>>,
}

fn presets_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("json_index").join("presets.toml"))
}

/// Reads `~/.config/json_index/presets.toml`. A missing file yields no presets.
pub fn load_presets_file() -> Result<HashMap<String, PresetConfig>> {
    let config_path = presets_path()?;

    if !config_path.exists() {
        return Ok(HashMap::new());
    }

    let content = fs::read_to_string(&config_path)
        .context(format!("Failed to read config at {:?}", config_path))?;

    parse_presets(&content)
}

pub fn parse_presets(content: &str) -> Result<HashMap<String, PresetConfig>> {
    let parsed: PresetsFile = toml::from_str(content).context("Failed to parse presets.toml")?;
    Ok(parsed.presets)
}

/// Appends a single '/' to a non-empty URL that lacks one.
pub fn normalize_base_url(url: &str) -> String {
    if url.is_empty() || url.ends_with('/') {
        url.to_string()
    } else {
        format!("{}/", url)
    }
}

/// The project root enclosing the tool: parent of the executable's directory.
pub fn default_root() -> Result<PathBuf> {
    let exe = env::current_exe().context("Failed to locate the running executable")?;
    let exe = fs::canonicalize(&exe).unwrap_or(exe);
    exe.parent()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .context(format!("Executable {:?} has no enclosing project root", exe))
}

pub fn resolve_root(path: &Path) -> Result<PathBuf> {
    let root = fs::canonicalize(path)
        .context(format!("Root directory {:?} not found", path))?;
    if !root.is_dir() {
        bail!("Root {:?} is not a directory", root);
    }
    Ok(root)
}

pub fn resolve_output(root: &Path, output: &Path) -> PathBuf {
    if output.is_absolute() {
        output.to_path_buf()
    } else {
        root.join(output)
    }
}

fn merge_vecs(preset_vec: Option<Vec<String>>, cli_vec: Option<Vec<String>>) -> Vec<String> {
    let mut combined = preset_vec.unwrap_or_default();
    if let Some(mut cli_items) = cli_vec {
        combined.append(&mut cli_items);
    }
    // Deduplicate while keeping order
    let mut seen = std::collections::HashSet::new();
    combined.retain(|item| seen.insert(item.clone()));
    combined
}

/// Merges CLI > preset > built-in defaults into a resolved configuration.
pub fn resolve_config(
    cli: Cli,
    presets: &HashMap<String, PresetConfig>,
    project_name: Option<&str>,
) -> Result<RuntimeConfig> {
    // Determine preset to use: CLI flag > Auto-detect > None
    let preset_key = cli.preset.as_deref().or(project_name);
    if let Some(name) = cli.preset.as_deref() {
        if !presets.contains_key(name) {
            log::warn!("Preset '{}' not found, using defaults", name);
        }
    }
    let preset = preset_key
        .and_then(|k| presets.get(k))
        .cloned()
        .unwrap_or_default();

    let root = match cli.root.or(preset.root) {
        Some(path) => resolve_root(&path)?,
        None => resolve_root(&default_root()?)?,
    };

    let output = cli
        .output
        .or(preset.output)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    let base_url = cli
        .base_url
        .or(preset.base_url)
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let config = RuntimeConfig {
        output: resolve_output(&root, &output),
        root,
        base_url: normalize_base_url(&base_url),
        exclude: merge_vecs(preset.exclude, cli.exclude),
    };

    log::debug!("Resolved configuration: {:?}", config);
    Ok(config)
}
