//! `duplicate-message`: the same source string appears twice within one
//! context. The format does not forbid it, but only the first entry is
//! ever returned by lookup, so the second is dead weight and usually a
//! merge artifact.

use std::collections::HashMap;

use crate::catalog::Catalog;
use crate::issue::Issue;
use crate::rules::Checker;

pub struct DuplicateRule;

impl Checker for DuplicateRule {
    fn name(&self) -> &'static str {
        "duplicates"
    }

    fn check(&self, file_path: &str, catalog: &Catalog) -> Vec<Issue> {
        let mut issues = Vec::new();
        for context in catalog.contexts() {
            let mut first_seen: HashMap<&str, u32> = HashMap::new();
            for message in &context.messages {
                match first_seen.get(message.source.as_str()) {
                    Some(&first_line) => {
                        issues.push(Issue::duplicate_message(
                            file_path,
                            message.ts_line,
                            &context.name,
                            &message.source,
                            first_line,
                        ));
                    }
                    None => {
                        first_seen.insert(&message.source, message.ts_line);
                    }
                }
            }
        }
        issues
    }
}
