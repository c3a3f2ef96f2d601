//! Command dispatch for the lingot CLI.

use std::{fs, path::Path};

use anyhow::Result;

use super::args::{Arguments, Command};
use super::exit_status::ExitStatus;
use crate::commands::{check::check, fmt::fmt, query::query, stats::stats};
use crate::config::{CONFIG_FILE_NAME, default_config_json};
use crate::reporter::SUCCESS_MARK;

pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Stats(cmd)) => stats(cmd),
        Some(Command::Query(cmd)) => query(cmd),
        Some(Command::Fmt(cmd)) => fmt(cmd),
        Some(Command::Init) => {
            init()?;
            println!("{} Created {}", SUCCESS_MARK, CONFIG_FILE_NAME);
            Ok(ExitStatus::Success)
        }
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}

fn init() -> Result<()> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        anyhow::bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()?)?;
    Ok(())
}
