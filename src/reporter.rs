//! Report formatting and printing utilities.
//!
//! This module is separate from the core library logic to allow lingot
//! to be used as a library without printing side effects.

use colored::Colorize;

use crate::issue::{Issue, Severity};

/// Success mark for consistent output formatting
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓
/// Failure mark for consistent output formatting
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in a cargo-style format.
///
/// Issues are sorted and displayed with:
/// - Severity and the offending source string
/// - Clickable file location (path:line) plus the context name
/// - Notes with rule-specific detail
/// - Summary of total errors/warnings
pub fn print_report(issues: &[Issue]) {
    let mut sorted = issues.to_vec();
    sorted.sort();

    for issue in &sorted {
        let severity_str = match issue.severity {
            Severity::Error => "error".bold().red(),
            Severity::Warning => "warning".bold().yellow(),
        };

        println!(
            "{}: \"{}\"  {}",
            severity_str,
            issue.message,
            issue.rule.to_string().dimmed().cyan()
        );

        match &issue.context {
            Some(context) => println!(
                "  {} {}:{} (context {})",
                "-->".blue(),
                issue.file_path,
                issue.line,
                context
            ),
            None => println!("  {} {}:{}", "-->".blue(), issue.file_path, issue.line),
        }

        if let Some(note) = &issue.note {
            println!("  {} {} {}", "=".blue(), "note:".bold(), note);
        }

        println!(); // Empty line between issues
    }

    let total_errors = sorted
        .iter()
        .filter(|i| i.severity == Severity::Error)
        .count();
    let total_warnings = sorted
        .iter()
        .filter(|i| i.severity == Severity::Warning)
        .count();
    let total_problems = total_errors + total_warnings;

    if total_problems > 0 {
        println!(
            "{} {} problems ({} {}, {} {})",
            FAILURE_MARK.red(),
            total_problems,
            total_errors,
            if total_errors == 1 { "error" } else { "errors" }.red(),
            total_warnings,
            if total_warnings == 1 {
                "warning"
            } else {
                "warnings"
            }
            .yellow()
        );
    }
}

/// Print a success message when no issues are found.
///
/// Displays the number of files checked to give the user confidence
/// that the check actually ran and covered the expected scope.
pub fn print_success(translation_files: usize) {
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} translation {} - no issues found",
            translation_files,
            if translation_files == 1 { "file" } else { "files" }
        )
        .green()
    );
}
