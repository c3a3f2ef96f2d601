//! `empty-translation`: a finished entry with no translation text. The
//! lookup would return an empty string where the UI expects a label;
//! almost always a stale or hand-edited entry that should be marked
//! unfinished instead.

use crate::catalog::Catalog;
use crate::issue::Issue;
use crate::rules::Checker;

pub struct EmptyTranslationRule;

impl Checker for EmptyTranslationRule {
    fn name(&self) -> &'static str {
        "empty"
    }

    fn check(&self, file_path: &str, catalog: &Catalog) -> Vec<Issue> {
        let mut issues = Vec::new();
        for context in catalog.contexts() {
            for message in &context.messages {
                if message.is_finished()
                    && message.translation.is_empty()
                    && !message.source.is_empty()
                {
                    issues.push(Issue::empty_translation(
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
