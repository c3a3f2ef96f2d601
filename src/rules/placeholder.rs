//! `placeholder-mismatch`: a finished translation must keep exactly the
//! `%N` placeholders of its source, or positional substitution breaks at
//! render time.

use crate::catalog::Catalog;
use crate::issue::Issue;
use crate::placeholders;
use crate::rules::Checker;

pub struct PlaceholderRule;

impl Checker for PlaceholderRule {
    fn name(&self) -> &'static str {
        "placeholders"
    }

    fn check(&self, file_path: &str, catalog: &Catalog) -> Vec<Issue> {
        let mut issues = Vec::new();
        for context in catalog.contexts() {
            for message in &context.messages {
                // Unfinished entries carry provisional text; they are
                // reported by the unfinished rule instead.
                if !message.is_finished() {
                    continue;
                }
                let in_source = placeholders::scan(&message.source);
                let in_translation = placeholders::scan(&message.translation);
                if in_source.is_empty() && in_translation.is_empty() {
                    continue;
                }
                if !placeholders::same_placeholders(&message.source, &message.translation) {
                    issues.push(Issue::placeholder_mismatch(
                        file_path,
                        message.ts_line,
                        &context.name,
                        &message.source,
                        &in_source,
                        &in_translation,
                    ));
                }
            }
        }
        issues
    }
}
