//! Report printer
//!
//! Prints the four result lists of a scan in a fixed order. Each list is
//! skipped when empty and otherwise introduced by a section header.

use pomscan::RunReport;

use crate::ui;

const MISSING: &str = "Missing files";
const SIZE_MISMATCH: &str = "Size mismatches";
const DESCRIPTOR_ERRORS: &str = "Load POM errors";
const COMMANDS: &str = "Deploy commands";

/// Sections of a report in print order, empty ones left out
pub fn sections(report: &RunReport) -> Vec<(&'static str, &[String])> {
    [
        (MISSING, report.not_found.as_slice()),
        (SIZE_MISMATCH, report.size_mismatches.as_slice()),
        (DESCRIPTOR_ERRORS, report.descriptor_errors.as_slice()),
        (COMMANDS, report.scripts.as_slice()),
    ]
    .into_iter()
    .filter(|(_, lines)| !lines.is_empty())
    .collect()
}

/// Print a finished report to stdout
pub fn print(report: &RunReport) {
    for (title, lines) in sections(report) {
        ui::section(title, lines.len());
        for line in lines {
            println!("{}", line);
        }
    }

    if report.is_empty() {
        log::info!("nothing to report");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_order_and_skip_empty() {
        let report = RunReport {
            not_found: vec!["./a.jar".to_string()],
            size_mismatches: vec![],
            descriptor_errors: vec!["bad: ./b.pom".to_string()],
            scripts: vec!["mvn deploy:deploy-file ...".to_string()],
        };

        let titles: Vec<_> = sections(&report).iter().map(|(t, _)| *t).collect();
        assert_eq!(titles, vec![MISSING, DESCRIPTOR_ERRORS, COMMANDS]);
    }

    #[test]
    fn test_sections_empty_report() {
        assert!(sections(&RunReport::default()).is_empty());
    }
}
