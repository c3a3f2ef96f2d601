use anyhow::Result;
use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::catalog::StatusCounts;
use crate::cli::{ExitStatus, StatsCommand};
use crate::commands::context::CommandContext;

/// Print per-file and per-context completion statistics.
///
/// This is the reviewer-facing view of the status flags the table
/// retains: how many entries are finished, how many still need work,
/// and how many are vanished/obsolete leftovers.
pub fn stats(cmd: StatsCommand) -> Result<ExitStatus> {
    let ctx = CommandContext::new(&cmd.paths, &cmd.common)?;
    let catalogs = ctx.load_catalogs_strict()?;

    let mut grand_total = StatusCounts::default();

    for loaded in &catalogs {
        println!("{}", loaded.path_str().bold());

        // Align the name column by display width; context names in the
        // header row and CJK-heavy names must line up.
        let name_width = loaded
            .catalog
            .contexts()
            .iter()
            .map(|c| UnicodeWidthStr::width(c.name.as_str()))
            .chain([UnicodeWidthStr::width("context")])
            .max()
            .unwrap_or(0);

        println!(
            "  {}  {:>8} {:>10} {:>8} {:>8}  {:>7}",
            pad("context", name_width),
            "finished",
            "unfinished",
            "vanished",
            "obsolete",
            "done"
        );

        for context in loaded.catalog.contexts() {
            let counts = context.status_counts();
            print_row(&context.name, name_width, counts, false);
        }

        let file_total = loaded.catalog.status_counts();
        print_row("total", name_width, file_total, true);
        grand_total.merge(file_total);
        println!();
    }

    if catalogs.len() > 1 {
        println!(
            "{}",
            format!(
                "{} contexts, {} entries, {:.1}% finished overall",
                catalogs
                    .iter()
                    .map(|l| l.catalog.contexts().len())
                    .sum::<usize>(),
                grand_total.total(),
                grand_total.percent_finished()
            )
            .bold()
        );
    }

    Ok(ExitStatus::Success)
}

fn print_row(name: &str, width: usize, counts: StatusCounts, bold: bool) {
    let percent = format!("{:>6.1}%", counts.percent_finished());
    let percent = if counts.unfinished == 0 {
        percent.green()
    } else {
        percent.yellow()
    };
    let line = format!(
        "  {}  {:>8} {:>10} {:>8} {:>8}  {}",
        pad(name, width),
        counts.finished,
        counts.unfinished,
        counts.vanished,
        counts.obsolete,
        percent
    );
    if bold {
        println!("{}", line.bold());
    } else {
        println!("{}", line);
    }
}

/// Pad to a display width, not a char count, so CJK names align.
fn pad(name: &str, width: usize) -> String {
    let current = UnicodeWidthStr::width(name);
    format!("{}{}", name, " ".repeat(width.saturating_sub(current)))
}
