//! Shared setup for all commands: config resolution, file discovery and
//! parallel catalog loading.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use rayon::prelude::*;

use crate::catalog::Catalog;
use crate::cli::CommonArgs;
use crate::config::load_config;
use crate::issue::Issue;
use crate::parsers::parse_ts_file;
use crate::scanner::find_ts_files;

/// A catalog together with the file it came from.
pub struct LoadedCatalog {
    pub path: PathBuf,
    pub catalog: Catalog,
}

impl LoadedCatalog {
    pub fn path_str(&self) -> String {
        self.path.display().to_string()
    }
}

/// Data container shared by all commands.
///
/// Built once from CLI arguments: loads the config file (if any),
/// applies flag overrides and resolves the target file list. Catalog
/// loading is separate so commands can choose between collecting parse
/// failures as issues (`check`) and failing fast (`stats`, `query`,
/// `fmt`).
pub struct CommandContext {
    pub verbose: bool,
    pub files: Vec<PathBuf>,
}

impl CommandContext {
    pub fn new(paths: &[PathBuf], common: &CommonArgs) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to determine working directory")?;
        let config_result = load_config(&cwd)?;

        if common.verbose && !config_result.from_file {
            eprintln!(
                "Note: No {} found, using default configuration",
                crate::config::CONFIG_FILE_NAME
            );
        }

        let mut config = config_result.config;
        if let Some(root) = &common.translations_root {
            config.translations_root = root.display().to_string();
        }

        let ignores = config.ignore_patterns();
        let files = if paths.is_empty() {
            find_ts_files(Path::new(&config.translations_root), &ignores)?
        } else {
            let mut files = Vec::new();
            for path in paths {
                files.extend(find_ts_files(path, &ignores)?);
            }
            files
        };

        if common.verbose {
            for file in &files {
                eprintln!("Found translation file: {}", file.display());
            }
        }

        Ok(Self {
            verbose: common.verbose,
            files,
        })
    }

    /// Parse all target files in parallel. Unparseable files become
    /// `parse-error` issues; the rest are still returned.
    pub fn load_catalogs(&self) -> (Vec<LoadedCatalog>, Vec<Issue>) {
        let results: Vec<_> = self
            .files
            .par_iter()
            .map(|path| match parse_ts_file(path) {
                Ok(catalog) => Ok(LoadedCatalog {
                    path: path.clone(),
                    catalog,
                }),
                Err(err) => Err(Issue::parse_error(
                    &path.display().to_string(),
                    &err.root_cause().to_string(),
                )),
            })
            .collect();

        let mut catalogs = Vec::new();
        let mut issues = Vec::new();
        for result in results {
            match result {
                Ok(loaded) => catalogs.push(loaded),
                Err(issue) => issues.push(issue),
            }
        }
        (catalogs, issues)
    }

    /// Parse all target files, failing on the first unparseable one.
    pub fn load_catalogs_strict(&self) -> Result<Vec<LoadedCatalog>> {
        self.files
            .par_iter()
            .map(|path| {
                parse_ts_file(path).map(|catalog| LoadedCatalog {
                    path: path.clone(),
                    catalog,
                })
            })
            .collect()
    }
}
