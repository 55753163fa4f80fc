use colored::Colorize;

/// Turn coloured output on or off for the whole process
pub fn set_color(enabled: bool) {
    if !enabled {
        colored::control::set_override(false);
    }
}

/// Print a warning message
pub fn warn(msg: &str) {
    eprintln!("{} {}", "⚠".yellow(), msg);
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a section header preceded by a blank line
pub fn section(title: &str, count: usize) {
    println!();
    println!("{}", section_title(title, count).cyan().bold());
}

/// Section header text with its entry count
pub fn section_title(title: &str, count: usize) -> String {
    format!("{} ({})", title, count)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_title() {
        assert_eq!(section_title("Missing files", 3), "Missing files (3)");
        assert_eq!(section_title("Deploy commands", 0), "Deploy commands (0)");
    }
}
