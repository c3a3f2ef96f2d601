//! Detection rules for translation file defects.
//!
//! Each rule implements [`Checker`] and walks one parsed catalog,
//! producing [`Issue`]s. Rules are composed by the check runner; they
//! never touch the filesystem themselves.

pub mod duplicates;
pub mod empty;
pub mod mnemonic;
pub mod placeholder;
pub mod unfinished;

use crate::catalog::Catalog;
use crate::issue::Issue;

/// A single detection rule over one catalog.
pub trait Checker {
    /// Stable identifier, used for deduplication and verbose tracing.
    fn name(&self) -> &'static str;

    /// Run the rule. `file_path` is the `.ts` file the catalog came
    /// from, used for issue locations.
    fn check(&self, file_path: &str, catalog: &Catalog) -> Vec<Issue>;
}
