use std::fs;

use anyhow::{Context as _, Result};
use colored::Colorize;

use crate::cli::{ExitStatus, FmtCommand};
use crate::commands::context::CommandContext;
use crate::parsers::parse_ts_str;
use crate::reporter::SUCCESS_MARK;
use crate::writer;

/// Rewrite translation files in the canonical layout.
///
/// Default is a dry run that lists the files that would change;
/// `--apply` writes them. Because serialization is lossless, the only
/// thing that changes is formatting.
pub fn fmt(cmd: FmtCommand) -> Result<ExitStatus> {
    let ctx = CommandContext::new(&cmd.paths, &cmd.common)?;

    let mut changed = Vec::new();
    for path in &ctx.files {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read translation file: {}", path.display()))?;
        let catalog = parse_ts_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        let canonical = writer::to_ts_string(&catalog);

        if content != canonical {
            if cmd.apply {
                fs::write(path, canonical)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
            }
            changed.push(path);
        } else if ctx.verbose {
            eprintln!("Already canonical: {}", path.display());
        }
    }

    if changed.is_empty() {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "{} translation {} already canonical",
                ctx.files.len(),
                if ctx.files.len() == 1 { "file" } else { "files" }
            )
            .green()
        );
        return Ok(ExitStatus::Success);
    }

    if cmd.apply {
        for path in &changed {
            println!("Rewrote {}", path.display());
        }
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Rewrote {} file(s)", changed.len()).green()
        );
    } else {
        for path in &changed {
            println!("Would rewrite {}", path.display());
        }
        println!(
            "\n{} file(s) are not in canonical layout. Run again with {} to write changes.",
            changed.len(),
            "--apply".cyan()
        );
    }

    Ok(ExitStatus::Success)
}
