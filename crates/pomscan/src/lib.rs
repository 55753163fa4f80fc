//! # pomscan
//!
//! Scan Maven build output and derive deploy commands from POM descriptors.
//!
//! This crate provides functionality to:
//! - Walk a build-output tree and stop at every directory holding an artifact
//! - Read POM descriptors, including non-UTF-8 ones that declare their charset
//! - Resolve groupId/artifactId/version with `<parent>` fallback
//! - Generate one `mvn deploy:deploy-file` command per artifact
//! - Alternatively, compare artifact sizes against a second build output
//!
//! ## Example
//!
//! ```no_run
//! use pomscan::{ScanOptions, Scanner, DEFAULT_TARGET_PATTERN};
//!
//! let options = ScanOptions::new("/build/out", DEFAULT_TARGET_PATTERN)?;
//! let report = Scanner::new(options).run()?;
//!
//! for error in &report.descriptor_errors {
//!     eprintln!("{}", error);
//! }
//! for script in &report.scripts {
//!     println!("{}", script);
//! }
//! # Ok::<(), pomscan::Error>(())
//! ```

pub mod compare;
pub mod coordinates;
pub mod descriptor;
mod error;
pub mod locate;
pub mod script;
mod types;
pub mod walk;

pub use coordinates::{Coordinates, Packaging};
pub use descriptor::{DecodeError, Descriptor, ParentCoordinates};
pub use error::{Error, Result};
pub use script::{DeployCommand, ScriptOptions, distinct};
pub use types::{DEFAULT_TARGET_PATTERN, RunReport, ScanOptions};

use std::path::Path;

use locate::{contains_target_file, find_descriptor, list_files, locate_artifact, relative_display};

/// Drives one scan over a build-output tree
pub struct Scanner {
    options: ScanOptions,
}

impl Scanner {
    pub fn new(options: ScanOptions) -> Self {
        Self { options }
    }

    /// Walk the tree and process every leaf directory
    ///
    /// Each leaf is either compared against the comparison root or turned
    /// into a deploy command. The first fatal error aborts the scan and no
    /// report is returned.
    pub fn run(&self) -> Result<RunReport> {
        let root = &self.options.root;
        if !root.exists() {
            return Err(Error::PathNotFound(root.clone()));
        }

        let mut report = RunReport::default();
        walk::walk(
            root,
            |dir| contains_target_file(dir, &self.options.target),
            |dir| self.process_leaf(dir, &mut report),
        )?;

        report.scripts = distinct(report.scripts);
        log::info!(
            "scan finished: {} command(s), {} problem(s)",
            report.scripts.len(),
            report.problem_count()
        );
        Ok(report)
    }

    fn process_leaf(&self, dir: &Path, report: &mut RunReport) -> Result<()> {
        match &self.options.compare_to {
            Some(other_root) => self.compare_leaf(dir, other_root, report),
            None => self.generate(dir, report),
        }
    }

    /// Compare every target file of `dir` with its mirror under `other_root`
    fn compare_leaf(&self, dir: &Path, other_root: &Path, report: &mut RunReport) -> Result<()> {
        let rel = dir.strip_prefix(&self.options.root).unwrap_or(dir);
        let mirror = other_root.join(rel);

        for expected in list_files(dir)? {
            let Some(name) = expected.file_name() else {
                continue;
            };
            if !self.options.target.is_match(&name.to_string_lossy()) {
                continue;
            }

            let actual = mirror.join(name);
            let display = relative_display(other_root, &actual);
            compare::compare(&expected, &actual, &display, report)?;
        }

        Ok(())
    }

    /// Resolve the descriptor of `dir` and record its deploy command
    fn generate(&self, dir: &Path, report: &mut RunReport) -> Result<()> {
        let root = &self.options.root;
        let settings = &self.options.script;

        let descriptor_path = find_descriptor(dir)?;
        let descriptor = match descriptor::load(&descriptor_path)? {
            Ok(descriptor) => descriptor,
            Err(err) => {
                let entry = format!("{}: {}", err, relative_display(root, &descriptor_path));
                log::warn!("load POM error: {}", entry);
                report.descriptor_errors.push(entry);
                return Ok(());
            }
        };

        let coordinates = descriptor.resolve()?;
        if !settings.accepts(&coordinates.packaging) {
            log::debug!(
                "skipping {} ({} packaging)",
                descriptor_path.display(),
                coordinates.packaging
            );
            return Ok(());
        }

        let Some(artifact) = locate_artifact(
            dir,
            &descriptor.path,
            &coordinates.packaging,
            &settings.artifact_suffix,
        )?
        else {
            log::debug!("no artifact for {} in {}", coordinates.artifact_id, dir.display());
            return Ok(());
        };

        let file = relative_display(root, &artifact);
        if let Some(command) = script::emit(&coordinates, &file, settings) {
            log::info!(
                "{}:{}:{} -> {}",
                coordinates.group_id,
                coordinates.artifact_id,
                coordinates.version,
                file
            );
            report.scripts.push(command);
        }

        Ok(())
    }
}
