//! `missing-mnemonic`: the source marks a keyboard accelerator with `&`
//! but the finished translation carries none. Translations are expected
//! to keep a marker, commonly appended in parentheses for CJK UI text,
//! e.g. `&Annotation` -> `注釈(&A)`.

use crate::catalog::Catalog;
use crate::issue::Issue;
use crate::rules::Checker;

pub struct MnemonicRule;

/// The accelerator character marked in `text`, if any.
///
/// `&&` is a literal ampersand, not a marker. Works on the unescaped
/// text, where `&amp;` from the XML has already been resolved.
pub fn find_mnemonic(text: &str) -> Option<char> {
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '&' {
            continue;
        }
        match chars.peek() {
            Some('&') => {
                chars.next();
            }
            Some(next) if next.is_alphanumeric() => return Some(*next),
            _ => {}
        }
    }
    None
}

impl Checker for MnemonicRule {
    fn name(&self) -> &'static str {
        "mnemonics"
    }

    fn check(&self, file_path: &str, catalog: &Catalog) -> Vec<Issue> {
        let mut issues = Vec::new();
        for context in catalog.contexts() {
            for message in &context.messages {
                if !message.is_finished() || message.translation.is_empty() {
                    continue;
                }
                if let Some(marker) = find_mnemonic(&message.source)
                    && find_mnemonic(&message.translation).is_none()
                {
                    issues.push(Issue::missing_mnemonic(
                        file_path,
                        message.ts_line,
                        &context.name,
                        &message.source,
                        marker,
                    ));
                }
            }
        }
        issues
    }
}
