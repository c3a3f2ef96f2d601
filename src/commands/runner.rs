//! Orchestration of detection rules for the check command.

use crate::catalog::Catalog;
use crate::cli::CheckRule;
use crate::issue::Issue;
use crate::rules::{
    Checker, duplicates::DuplicateRule, empty::EmptyTranslationRule, mnemonic::MnemonicRule,
    placeholder::PlaceholderRule, unfinished::UnfinishedRule,
};

/// Collects the requested rules and runs them over parsed catalogs.
pub struct CheckRunner {
    checkers: Vec<Box<dyn Checker>>,
}

impl CheckRunner {
    pub fn new() -> Self {
        Self {
            checkers: Vec::new(),
        }
    }

    /// All rules; the default when none are requested explicitly.
    pub fn from_rules(rules: &[CheckRule]) -> Self {
        if rules.is_empty() {
            return Self::new().all();
        }
        rules.iter().fold(Self::new(), |runner, rule| runner.add(*rule))
    }

    pub fn add(mut self, rule: CheckRule) -> Self {
        let checker: Box<dyn Checker> = match rule {
            CheckRule::Placeholders => Box::new(PlaceholderRule),
            CheckRule::Unfinished => Box::new(UnfinishedRule),
            CheckRule::Empty => Box::new(EmptyTranslationRule),
            CheckRule::Mnemonics => Box::new(MnemonicRule),
            CheckRule::Duplicates => Box::new(DuplicateRule),
        };

        // Deduplicate: skip if already added
        if self.checkers.iter().any(|c| c.name() == checker.name()) {
            return self;
        }
        self.checkers.push(checker);
        self
    }

    pub fn all(self) -> Self {
        self.add(CheckRule::Placeholders)
            .add(CheckRule::Unfinished)
            .add(CheckRule::Empty)
            .add(CheckRule::Mnemonics)
            .add(CheckRule::Duplicates)
    }

    pub fn run(&self, file_path: &str, catalog: &Catalog, verbose: bool) -> Vec<Issue> {
        let mut issues = Vec::new();
        for checker in &self.checkers {
            if verbose {
                eprintln!("Running checker: {}", checker.name());
            }
            issues.extend(checker.check(file_path, catalog));
        }
        issues
    }
}

impl Default for CheckRunner {
    fn default() -> Self {
        Self::new()
    }
}
