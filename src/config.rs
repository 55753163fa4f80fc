//! Settings merge: CLI flags over config file over built-in defaults

use anyhow::{Context, Result};
use pomscan::{DEFAULT_TARGET_PATTERN, Packaging, ScanOptions, ScriptOptions};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::paths;

// ============================================================================
// Config File
// ============================================================================

/// Contents of `pomdeploy.toml`
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub regex: Option<String>,
    pub url: Option<String>,
    pub repo_id: Option<String>,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    pub packing: Option<String>,
    pub artifact_suffix: Option<String>,
    pub quote: Option<bool>,
}

impl FileConfig {
    /// Load a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Could not read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Load the config file for a scan of `root`, or an empty config
    pub fn discover(explicit: Option<&Path>, root: &Path) -> Result<Self> {
        match paths::config_file(explicit, root) {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }
}

// ============================================================================
// Scan Settings
// ============================================================================

/// Resolve the scan root from `--cwd`, defaulting to the working directory
pub fn scan_root(cli: &Cli) -> Result<PathBuf> {
    match cli.cwd.as_deref() {
        Some(dir) => Ok(paths::expand(dir)),
        None => std::env::current_dir().context("Could not determine current directory"),
    }
}

/// Build scan options for `root`
pub fn scan_options(cli: &Cli, file: &FileConfig, root: PathBuf) -> Result<ScanOptions> {
    let pick = |flag: &Option<String>, from_file: &Option<String>, default: &str| {
        flag.clone()
            .or_else(|| from_file.clone())
            .unwrap_or_else(|| default.to_string())
    };
    let defaults = ScriptOptions::default();

    // packaging names in descriptors are lowercase
    let packing = pick(&cli.packing, &file.packing, &defaults.packaging.to_string())
        .to_ascii_lowercase();

    let pattern = pick(&cli.regex, &file.regex, DEFAULT_TARGET_PATTERN);
    let compare_to = cli
        .compare_to
        .as_deref()
        .filter(|dir| !dir.is_empty())
        .map(paths::expand);

    let script = ScriptOptions {
        repository_id: pick(&cli.repo_id, &file.repo_id, &defaults.repository_id),
        url: pick(&cli.url, &file.url, &defaults.url),
        prefix: pick(&cli.prefix, &file.prefix, &defaults.prefix),
        suffix: pick(&cli.suffix, &file.suffix, &defaults.suffix),
        packaging: Packaging::from(packing.as_str()),
        artifact_suffix: pick(
            &cli.artifact_suffix,
            &file.artifact_suffix,
            &defaults.artifact_suffix,
        ),
        quote: !cli.no_quote && file.quote.unwrap_or(defaults.quote),
    };

    let options = ScanOptions::new(root, &pattern)
        .with_context(|| format!("Invalid --regex '{}'", pattern))?
        .with_compare_to(compare_to)
        .with_script(script);

    Ok(options)
}

// ============================================================================
// Tests
// ============================================================================
