use std::{cmp::Ordering, fmt};

use crate::placeholders;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    PlaceholderMismatch,
    EmptyTranslation,
    MissingMnemonic,
    DuplicateMessage,
    Unfinished,
    ParseError,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::PlaceholderMismatch => write!(f, "placeholder-mismatch"),
            Rule::EmptyTranslation => write!(f, "empty-translation"),
            Rule::MissingMnemonic => write!(f, "missing-mnemonic"),
            Rule::DuplicateMessage => write!(f, "duplicate-message"),
            Rule::Unfinished => write!(f, "unfinished"),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

/// One finding in a translation file.
///
/// `line` points into the `.ts` resource itself (the start of the
/// offending `<message>`), so terminals render a clickable location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub file_path: String,
    pub line: u32,
    pub context: Option<String>,
    pub message: String,
    pub severity: Severity,
    pub rule: Rule,
    pub note: Option<String>,
}

impl Issue {
    pub fn placeholder_mismatch(
        file_path: &str,
        line: u32,
        context: &str,
        source: &str,
        source_placeholders: &[u8],
        translation_placeholders: &[u8],
    ) -> Self {
        Self {
            file_path: file_path.to_string(),
            line,
            context: Some(context.to_string()),
            message: source.to_string(),
            severity: Severity::Error,
            rule: Rule::PlaceholderMismatch,
            note: Some(format!(
                "source has {}; translation has {}",
                placeholders::describe(source_placeholders),
                placeholders::describe(translation_placeholders)
            )),
        }
    }

    pub fn empty_translation(file_path: &str, line: u32, context: &str, source: &str) -> Self {
        Self {
            file_path: file_path.to_string(),
            line,
            context: Some(context.to_string()),
            message: source.to_string(),
            severity: Severity::Warning,
            rule: Rule::EmptyTranslation,
            note: Some("finished entry with an empty translation".to_string()),
        }
    }

    pub fn missing_mnemonic(
        file_path: &str,
        line: u32,
        context: &str,
        source: &str,
        marker: char,
    ) -> Self {
        Self {
            file_path: file_path.to_string(),
            line,
            context: Some(context.to_string()),
            message: source.to_string(),
            severity: Severity::Warning,
            rule: Rule::MissingMnemonic,
            note: Some(format!(
                "source marks '&{}' as accelerator but the translation has no '&' marker",
                marker
            )),
        }
    }

    pub fn duplicate_message(
        file_path: &str,
        line: u32,
        context: &str,
        source: &str,
        first_line: u32,
    ) -> Self {
        Self {
            file_path: file_path.to_string(),
            line,
            context: Some(context.to_string()),
            message: source.to_string(),
            severity: Severity::Warning,
            rule: Rule::DuplicateMessage,
            note: Some(format!(
                "first entry at line {}; lookup uses the first one",
                first_line
            )),
        }
    }

    pub fn unfinished(file_path: &str, line: u32, context: &str, source: &str) -> Self {
        Self {
            file_path: file_path.to_string(),
            line,
            context: Some(context.to_string()),
            message: source.to_string(),
            severity: Severity::Warning,
            rule: Rule::Unfinished,
            note: None,
        }
    }

    pub fn parse_error(file_path: &str, error: &str) -> Self {
        Self {
            file_path: file_path.to_string(),
            line: 1,
            context: None,
            message: format!("Failed to parse: {}", error),
            severity: Severity::Error,
            rule: Rule::ParseError,
            note: None,
        }
    }
}

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> Ordering {
        // Message comparison keeps ordering deterministic when several
        // issues land on the same line (e.g. duplicate-message pairs).
        self.file_path
            .cmp(&other.file_path)
            .then_with(|| self.line.cmp(&other.line))
            .then_with(|| self.rule.cmp(&other.rule))
            .then_with(|| self.message.cmp(&other.message))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
