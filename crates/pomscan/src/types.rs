//! Data types for the pomscan crate

use std::path::PathBuf;

use regex::Regex;

use crate::error::Result;
use crate::script::ScriptOptions;

/// Default pattern of the file that marks a leaf directory
pub const DEFAULT_TARGET_PATTERN: &str = ".jar$";

/// Findings accumulated over one scan
///
/// Lists are appended in traversal order and only read once the scan ends.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Mirrored files absent from the comparison root
    pub not_found: Vec<String>,
    /// Mirrored files whose size differs, with both sizes
    pub size_mismatches: Vec<String>,
    /// Descriptors that could not be decoded, with their path
    pub descriptor_errors: Vec<String>,
    /// Generated deploy commands
    pub scripts: Vec<String>,
}

impl RunReport {
    /// True when nothing was recorded at all
    pub fn is_empty(&self) -> bool {
        self.not_found.is_empty()
            && self.size_mismatches.is_empty()
            && self.descriptor_errors.is_empty()
            && self.scripts.is_empty()
    }

    /// Number of recoverable problems found
    pub fn problem_count(&self) -> usize {
        self.not_found.len() + self.size_mismatches.len() + self.descriptor_errors.len()
    }
}

/// What to scan and what to do with each leaf directory
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Root of the primary build output
    pub root: PathBuf,
    /// Root of a second build output; enables size comparison instead of
    /// script generation
    pub compare_to: Option<PathBuf>,
    /// Pattern of the file name that marks a leaf directory
    pub target: Regex,
    /// Deploy command parameters
    pub script: ScriptOptions,
}

impl ScanOptions {
    /// Options for `root` with the given target pattern and default script
    /// parameters
    pub fn new(root: impl Into<PathBuf>, target_pattern: &str) -> Result<Self> {
        Ok(Self {
            root: root.into(),
            compare_to: None,
            target: Regex::new(target_pattern)?,
            script: ScriptOptions::default(),
        })
    }

    pub fn with_compare_to(mut self, compare_to: Option<PathBuf>) -> Self {
        self.compare_to = compare_to;
        self
    }

    pub fn with_script(mut self, script: ScriptOptions) -> Self {
        self.script = script;
        self
    }
}
