//! `unfinished`: entries still carrying `type="unfinished"`. The UI
//! falls back to the source text for these, so they are warnings for
//! translators rather than runtime errors.

use crate::catalog::{Catalog, TranslationStatus};
use crate::issue::Issue;
use crate::rules::Checker;

pub struct UnfinishedRule;

impl Checker for UnfinishedRule {
    fn name(&self) -> &'static str {
        "unfinished"
    }

    fn check(&self, file_path: &str, catalog: &Catalog) -> Vec<Issue> {
        let mut issues = Vec::new();
        for context in catalog.contexts() {
            for message in &context.messages {
                // Vanished and obsolete entries are intentionally
                // retired; only unfinished ones represent pending work.
                if message.status == TranslationStatus::Unfinished {
                    issues.push(Issue::unfinished(
                        file_path,
                        message.ts_line,
                        &context.name,
                        &message.source,
                    ));
                }
            }
        }
        issues
    }
}
