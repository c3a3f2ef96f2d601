use anyhow::Result;

use crate::cli::{CheckCommand, ExitStatus};
use crate::commands::context::CommandContext;
use crate::commands::runner::CheckRunner;
use crate::issue::Severity;
use crate::reporter;

/// Run detection rules over the target translation files.
///
/// Files that fail to parse are reported as `parse-error` issues and do
/// not stop the run; the remaining files are still checked. Warnings
/// alone exit 0, errors exit 1.
pub fn check(cmd: CheckCommand) -> Result<ExitStatus> {
    let ctx = CommandContext::new(&cmd.paths, &cmd.common)?;
    let runner = CheckRunner::from_rules(&cmd.rules);

    let (catalogs, mut issues) = ctx.load_catalogs();
    for loaded in &catalogs {
        issues.extend(runner.run(&loaded.path_str(), &loaded.catalog, ctx.verbose));
    }

    if issues.is_empty() {
        reporter::print_success(ctx.files.len());
        return Ok(ExitStatus::Success);
    }

    issues.sort();
    reporter::print_report(&issues);

    let has_errors = issues.iter().any(|i| i.severity == Severity::Error);
    Ok(if has_errors {
        ExitStatus::Failure
    } else {
        ExitStatus::Success
    })
}
