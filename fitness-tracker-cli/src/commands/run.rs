use anyhow::{bail, Result};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use super::AppContext;
use crate::config::OutputFormat;
use crate::models::{load_packages, InfoMessage};
use crate::runner::{PackageOutcome, Runner};

#[derive(Args)]
pub struct RunCommand {
    /// Package file (.toml or .json); defaults to the packages in the config
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Stop at the first package that fails
    #[arg(long)]
    fail_fast: bool,
}

impl RunCommand {
    pub fn execute(self, ctx: &AppContext) -> Result<()> {
        let config = ctx.load_config()?;
        let format = ctx.format_for(&config);
        let packages = match self.file {
            Some(ref path) => load_packages(path)?,
            None => config.packages,
        };

        let runner = Runner::new(self.fail_fast || config.runner.fail_fast);
        let mut index = 0;
        let mut write_error = None;

        let report = runner.run(&packages, |outcome| {
            index += 1;
            if let Err(err) = print_outcome(index, outcome, format) {
                if write_error.is_none() {
                    write_error = Some(err);
                }
            }
        });

        if let Some(err) = write_error {
            return Err(err);
        }

        if !report.is_success() {
            let skipped = packages.len() - report.outcomes.len();
            if skipped > 0 {
                eprintln!("{} skipped {} remaining packages", "!".yellow(), skipped);
            }
            bail!(
                "{} of {} packages failed",
                report.failed(),
                report.outcomes.len()
            );
        }

        Ok(())
    }
}

/// Print a successful summary to stdout or a failure to stderr
fn print_outcome(index: usize, outcome: &PackageOutcome, format: OutputFormat) -> Result<()> {
    match &outcome.result {
        Ok(info) => print_info(info, format),
        Err(err) => {
            eprintln!(
                "{} Package #{} ({}): {}",
                "✗".red(),
                index,
                outcome.package.code,
                err
            );
            Ok(())
        }
    }
}

pub(crate) fn print_info(info: &InfoMessage, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => println!("{}", info.get_message()),
        OutputFormat::Json => println!("{}", serde_json::to_string(info)?),
    }
    Ok(())
}
