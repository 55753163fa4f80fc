//! Size comparison between two build outputs

use std::path::Path;

use crate::error::{Error, Result};
use crate::types::RunReport;

/// Compare the size of `expected` against its mirror `actual`
///
/// `display` is how `actual` appears in the report. A missing `expected` is
/// fatal since it was just listed from the primary tree; a missing `actual` is
/// exactly what this mode looks for and is only recorded.
pub fn compare(
    expected: &Path,
    actual: &Path,
    display: &str,
    report: &mut RunReport,
) -> Result<()> {
    let expected_size = std::fs::metadata(expected)
        .map_err(|source| Error::ExpectedMissing {
            path: expected.to_path_buf(),
            source,
        })?
        .len();

    let Ok(actual_meta) = std::fs::metadata(actual) else {
        log::debug!("{} not found", actual.display());
        report.not_found.push(display.to_string());
        return Ok(());
    };

    let actual_size = actual_meta.len();
    if expected_size != actual_size {
        report.size_mismatches.push(format!(
            "{} (expected: {}, actual: {})",
            display, expected_size, actual_size
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sized(dir: &Path, name: &str, len: usize) -> std::path::PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, vec![0u8; len]).unwrap();
        path
    }

    #[test]
    fn test_missing_actual_is_recorded() {
        let tmp = TempDir::new().unwrap();
        let expected = sized(tmp.path(), "out.jar", 100);
        let mut report = RunReport::default();

        compare(&expected, &tmp.path().join("nope.jar"), "./mod1/out.jar", &mut report).unwrap();

        assert_eq!(report.not_found, vec!["./mod1/out.jar"]);
        assert!(report.size_mismatches.is_empty());
    }

    #[test]
    fn test_size_mismatch_is_recorded() {
        let tmp = TempDir::new().unwrap();
        let expected = sized(tmp.path(), "a.jar", 100);
        let actual = sized(tmp.path(), "b.jar", 120);
        let mut report = RunReport::default();

        compare(&expected, &actual, "./mod1/out.jar", &mut report).unwrap();

        assert!(report.not_found.is_empty());
        assert_eq!(
            report.size_mismatches,
            vec!["./mod1/out.jar (expected: 100, actual: 120)"]
        );
    }

    #[test]
    fn test_equal_sizes_are_silent() {
        let tmp = TempDir::new().unwrap();
        let expected = sized(tmp.path(), "a.jar", 64);
        let actual = sized(tmp.path(), "b.jar", 64);
        let mut report = RunReport::default();

        compare(&expected, &actual, "./b.jar", &mut report).unwrap();

        assert!(report.is_empty());
    }

    #[test]
    fn test_missing_expected_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let actual = sized(tmp.path(), "b.jar", 1);
        let mut report = RunReport::default();

        let result = compare(&tmp.path().join("a.jar"), &actual, "./b.jar", &mut report);

        assert!(matches!(result, Err(Error::ExpectedMissing { .. })));
        assert!(report.is_empty());
    }
}
