//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all
//! lingot commands. It uses clap's derive API for declarative argument
//! parsing.
//!
//! ## Commands
//!
//! - `check`: Run translation checks (placeholder mismatches, unfinished entries, etc.)
//! - `stats`: Show completion statistics per file and context
//! - `query`: Look up the translation for a (context, source) pair
//! - `fmt`: Rewrite translation files in canonical layout
//! - `init`: Initialize lingot configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Selectable detection rules for the check command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CheckRule {
    Placeholders,
    Unfinished,
    Empty,
    Mnemonics,
    Duplicates,
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Translations directory (overrides config file)
    #[arg(long)]
    pub translations_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Translation files or directories to check (default: configured translations root)
    pub paths: Vec<PathBuf>,

    /// Rules to run (default: all)
    /// Can be specified multiple times: --rule placeholders --rule unfinished
    #[arg(long = "rule", value_enum)]
    pub rules: Vec<CheckRule>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct StatsCommand {
    /// Translation files or directories to summarize (default: configured translations root)
    pub paths: Vec<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct QueryCommand {
    /// Context name, e.g. "Workbench"
    pub context: String,

    /// Source string to look up, e.g. "Drawing"
    pub source: String,

    /// Translation files or directories to search (default: configured translations root)
    pub paths: Vec<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct FmtCommand {
    /// Translation files or directories to rewrite (default: configured translations root)
    pub paths: Vec<PathBuf>,

    /// Actually rewrite files (default is dry-run)
    #[arg(long)]
    pub apply: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check translation files for defects (placeholder mismatches, unfinished entries, ...)
    Check(CheckCommand),
    /// Show completion statistics per file and context
    Stats(StatsCommand),
    /// Look up the translation for a (context, source) pair
    Query(QueryCommand),
    /// Rewrite translation files in canonical TS layout
    Fmt(FmtCommand),
    /// Initialize a new .lingotrc.json configuration file
    Init,
}
