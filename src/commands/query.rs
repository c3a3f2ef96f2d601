use anyhow::Result;

use crate::cli::{ExitStatus, QueryCommand};
use crate::commands::context::CommandContext;

/// Look up one `(context, source)` pair across the target files.
///
/// Prints the finished translation when one exists; otherwise prints
/// the source text unchanged, mirroring the display fallback of the
/// consuming UI. The exit status tells scripts which case occurred
/// without parsing the output.
pub fn query(cmd: QueryCommand) -> Result<ExitStatus> {
    let ctx = CommandContext::new(&cmd.paths, &cmd.common)?;
    let catalogs = ctx.load_catalogs_strict()?;

    for loaded in &catalogs {
        if let Some(translation) = loaded.catalog.lookup(&cmd.context, &cmd.source) {
            if ctx.verbose {
                eprintln!("Found in {}", loaded.path_str());
            }
            println!("{}", translation);
            return Ok(ExitStatus::Success);
        }
    }

    if ctx.verbose {
        eprintln!("No finished translation; falling back to the source text");
    }
    println!("{}", cmd.source);
    Ok(ExitStatus::Failure)
}
