//! Path resolution for pomdeploy
//!
//! # Config file lookup
//!
//! 1. `--config <FILE>`
//! 2. `POMDEPLOY_CONFIG` environment variable
//! 3. `pomdeploy.toml` in the scan root
//! 4. `<user config dir>/pomdeploy/config.toml`
//!    - Linux: `$XDG_CONFIG_HOME/pomdeploy/config.toml` or `~/.config/...`
//!    - macOS: `~/Library/Application Support/pomdeploy/config.toml`
//!    - Windows: `%APPDATA%\pomdeploy\config.toml`
//!
//! Explicit locations (1, 2) are used even when the file does not exist, so
//! that a typo is reported. Implicit locations (3, 4) are only used when
//! present.

use std::path::{Path, PathBuf};

/// Environment variable for config file override
pub const ENV_CONFIG_FILE: &str = "POMDEPLOY_CONFIG";

/// Config file name looked up in the scan root
pub const ROOT_CONFIG_NAME: &str = "pomdeploy.toml";

/// Find the config file to load, if any
pub fn config_file(explicit: Option<&Path>, root: &Path) -> Option<PathBuf> {
    let from_env = std::env::var(ENV_CONFIG_FILE).ok();
    let user_dir = dirs::config_dir();
    resolve_config_file(explicit, from_env.as_deref(), root, user_dir.as_deref())
}

fn resolve_config_file(
    explicit: Option<&Path>,
    from_env: Option<&str>,
    root: &Path,
    user_dir: Option<&Path>,
) -> Option<PathBuf> {
    if let Some(path) = explicit {
        log::debug!("Using config file from --config: {}", path.display());
        return Some(path.to_path_buf());
    }

    if let Some(value) = from_env.filter(|v| !v.is_empty()) {
        let path = expand(value);
        log::debug!("Using config file from {}: {}", ENV_CONFIG_FILE, path.display());
        return Some(path);
    }

    let in_root = root.join(ROOT_CONFIG_NAME);
    if in_root.is_file() {
        log::debug!("Using config file in scan root: {}", in_root.display());
        return Some(in_root);
    }

    let user = user_dir?.join("pomdeploy").join("config.toml");
    if user.is_file() {
        log::debug!("Using user config file: {}", user.display());
        return Some(user);
    }

    None
}

/// Expand ~ and environment variables in a path string.
///
/// Unknown variables are left as-is.
pub fn expand(path: &str) -> PathBuf {
    let expanded = shellexpand::full(path).unwrap_or(std::borrow::Cow::Borrowed(path));
    PathBuf::from(expanded.as_ref())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_explicit_wins() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join(ROOT_CONFIG_NAME), "").unwrap();

        let result = resolve_config_file(
            Some(Path::new("/etc/custom.toml")),
            Some("/from/env.toml"),
            tmp.path(),
            None,
        );
        assert_eq!(result, Some(PathBuf::from("/etc/custom.toml")));
    }

    #[test]
    fn test_env_over_root() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join(ROOT_CONFIG_NAME), "").unwrap();

        let result = resolve_config_file(None, Some("/from/env.toml"), tmp.path(), None);
        assert_eq!(result, Some(PathBuf::from("/from/env.toml")));
    }

    #[test]
    fn test_empty_env_is_ignored() {
        let tmp = TempDir::new().unwrap();
        let result = resolve_config_file(None, Some(""), tmp.path(), None);
        assert_eq!(result, None);
    }

    #[test]
    fn test_root_config() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join(ROOT_CONFIG_NAME);
        std::fs::write(&file, "").unwrap();

        assert_eq!(resolve_config_file(None, None, tmp.path(), None), Some(file));
    }

    #[test]
    fn test_user_config() {
        let root = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();
        let file = user.path().join("pomdeploy").join("config.toml");
        std::fs::create_dir_all(file.parent().unwrap()).unwrap();
        std::fs::write(&file, "").unwrap();

        let result = resolve_config_file(None, None, root.path(), Some(user.path()));
        assert_eq!(result, Some(file));
    }

    #[test]
    fn test_nothing_found() {
        let root = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();
        assert_eq!(
            resolve_config_file(None, None, root.path(), Some(user.path())),
            None
        );
    }

    #[test]
    fn test_expand_with_tilde() {
        let result = expand("~/test/path");
        let home = dirs::home_dir().unwrap();
        assert_eq!(result, home.join("test").join("path"));
    }

    #[test]
    fn test_expand_absolute() {
        assert_eq!(expand("/absolute/path"), PathBuf::from("/absolute/path"));
    }

    #[test]
    fn test_expand_unknown_env_var_unchanged() {
        let result = expand("/path/$NONEXISTENT_VAR_12345/file");
        assert_eq!(result, PathBuf::from("/path/$NONEXISTENT_VAR_12345/file"));
    }
}
