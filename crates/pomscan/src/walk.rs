//! Pruning directory traversal

use std::path::Path;

use walkdir::WalkDir;

use crate::error::Result;

/// Visit every target directory below `root`, depth-first and pre-order
///
/// Each subdirectory is classified with `is_target`. A target directory is
/// handed to `visit` and never descended into; any other directory is
/// recursed. Files are ignored, symlinks are not followed and `root` itself is
/// never classified. Directories that cannot be listed are treated as empty.
/// An error from `visit` stops the walk.
pub fn walk<P, V>(root: &Path, mut is_target: P, mut visit: V) -> Result<()>
where
    P: FnMut(&Path) -> bool,
    V: FnMut(&Path) -> Result<()>,
{
    let mut entries = WalkDir::new(root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.file_type().is_dir());

    while let Some(entry) = entries.next() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                log::debug!("skipping unreadable directory: {}", err);
                continue;
            }
        };

        if is_target(entry.path()) {
            log::debug!("target directory {}", entry.path().display());
            visit(entry.path())?;
            entries.skip_current_dir();
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn mkdir(root: &Path, rel: &str) -> PathBuf {
        let path = root.join(rel);
        std::fs::create_dir_all(&path).unwrap();
        path
    }

    fn is_marked(dir: &Path) -> bool {
        dir.join("target.jar").exists()
    }

    fn collect(root: &Path) -> Vec<String> {
        let mut seen = Vec::new();
        walk(root, is_marked, |dir| {
            seen.push(
                dir.strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/"),
            );
            Ok(())
        })
        .unwrap();
        seen
    }

    #[test]
    fn test_visits_leaves_in_order() {
        let tmp = TempDir::new().unwrap();
        for leaf in ["b/mod2", "a/mod1", "c"] {
            let dir = mkdir(tmp.path(), leaf);
            std::fs::write(dir.join("target.jar"), b"").unwrap();
        }
        mkdir(tmp.path(), "empty/deeper");

        assert_eq!(collect(tmp.path()), vec!["a/mod1", "b/mod2", "c"]);
    }

    #[test]
    fn test_does_not_recurse_below_target() {
        let tmp = TempDir::new().unwrap();
        let parent = mkdir(tmp.path(), "parent");
        std::fs::write(parent.join("target.jar"), b"").unwrap();
        let child = mkdir(tmp.path(), "parent/child");
        std::fs::write(child.join("target.jar"), b"").unwrap();

        assert_eq!(collect(tmp.path()), vec!["parent"]);
    }

    #[test]
    fn test_root_is_not_classified() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("target.jar"), b"").unwrap();
        let leaf = mkdir(tmp.path(), "mod1");
        std::fs::write(leaf.join("target.jar"), b"").unwrap();

        assert_eq!(collect(tmp.path()), vec!["mod1"]);
    }

    #[test]
    fn test_missing_root_yields_nothing() {
        let tmp = TempDir::new().unwrap();
        assert!(collect(&tmp.path().join("missing")).is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_directory_is_treated_as_empty() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        for leaf in ["a/mod1", "b-locked/mod2", "c/mod3"] {
            let dir = mkdir(tmp.path(), leaf);
            std::fs::write(dir.join("target.jar"), b"").unwrap();
        }
        let locked = tmp.path().join("b-locked");
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o000)).unwrap();

        // permission bits do not bind a privileged user
        let enforced = std::fs::read_dir(&locked).is_err();
        let seen = collect(tmp.path());

        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();

        if enforced {
            assert_eq!(seen, vec!["a/mod1", "c/mod3"]);
        } else {
            assert_eq!(seen, vec!["a/mod1", "b-locked/mod2", "c/mod3"]);
        }
    }

    #[test]
    fn test_visit_error_stops_walk() {
        let tmp = TempDir::new().unwrap();
        for leaf in ["a", "b"] {
            let dir = mkdir(tmp.path(), leaf);
            std::fs::write(dir.join("target.jar"), b"").unwrap();
        }

        let mut visits = 0;
        let result = walk(tmp.path(), is_marked, |dir| {
            visits += 1;
            Err(Error::DescriptorNotFound(dir.to_path_buf()))
        });

        assert!(matches!(result, Err(Error::DescriptorNotFound(_))));
        assert_eq!(visits, 1);
    }
}
