//! Descriptor and artifact lookup inside a leaf directory

use std::path::{Component, Path, PathBuf};

use regex::Regex;

use crate::coordinates::Packaging;
use crate::error::{Error, Result};

/// Default suffix of `jar`-packaged artifacts
pub const DEFAULT_ARTIFACT_SUFFIX: &str = ".jar";

const DESCRIPTOR_SUFFIX: &str = ".pom";
const DESCRIPTOR_FALLBACK: &str = "pom.xml";

/// List the regular files of a leaf directory, sorted by name
///
/// Unlike traversal, a listing failure here is fatal: the directory was
/// already classified as containing artifacts.
pub fn list_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let read_err = |source| Error::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        if !entry.file_type().map_err(read_err)?.is_dir() {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}

/// Whether `dir` directly contains a file whose name matches `target`
///
/// An unreadable directory simply does not qualify.
pub fn contains_target_file(dir: &Path, target: &Regex) -> bool {
    let Ok(entries) = std::fs::read_dir(dir) else {
        log::debug!("cannot list {}, not a target", dir.display());
        return false;
    };

    entries.filter_map(|e| e.ok()).any(|entry| {
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(true);
        !is_dir && target.is_match(&entry.file_name().to_string_lossy())
    })
}

/// Find the POM descriptor of a leaf directory
///
/// The first `*.pom` file wins; a `pom.xml` is used when there is none.
pub fn find_descriptor(dir: &Path) -> Result<PathBuf> {
    let files = list_files(dir)?;

    files
        .iter()
        .find(|path| name_ends_with(path, DESCRIPTOR_SUFFIX))
        .or_else(|| files.iter().find(|path| file_name(path) == DESCRIPTOR_FALLBACK))
        .cloned()
        .ok_or_else(|| Error::DescriptorNotFound(dir.to_path_buf()))
}

/// Decide which file of `dir` gets deployed for the given packaging
///
/// `pom` packaging deploys the descriptor itself. `jar` packaging deploys the
/// first file ending in `suffix`, or nothing when the module produced no
/// artifact. Other packagings have no lookup rule and are rejected.
pub fn locate_artifact(
    dir: &Path,
    descriptor: &Path,
    packaging: &Packaging,
    suffix: &str,
) -> Result<Option<PathBuf>> {
    match packaging {
        Packaging::Pom => Ok(Some(descriptor.to_path_buf())),
        Packaging::Jar => Ok(list_files(dir)?
            .into_iter()
            .find(|path| name_ends_with(path, suffix))),
        Packaging::Other(other) => Err(Error::UnsupportedPackaging {
            packaging: other.clone(),
            descriptor: descriptor.to_path_buf(),
        }),
    }
}

/// Render `path` relative to `root` as `./a/b`
///
/// Paths outside `root` are returned unchanged.
pub fn relative_display(root: &Path, path: &Path) -> String {
    let Ok(rel) = path.strip_prefix(root) else {
        return path.display().to_string();
    };

    let mut out = String::from(".");
    for component in rel.components() {
        if let Component::Normal(part) = component {
            out.push('/');
            out.push_str(&part.to_string_lossy());
        }
    }
    out
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}

fn name_ends_with(path: &Path, suffix: &str) -> bool {
    file_name(path).ends_with(suffix)
}
