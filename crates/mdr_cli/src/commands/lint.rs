//! Lint command implementation

use std::io;
use std::path::PathBuf;

use mdr_core::Linter;
use miette::{IntoDiagnostic, Result, WrapErr};
use tracing::debug;

use super::{Input, ensure_piped_stdin, load_config};
use crate::cli::{Cli, ColorChoice, OutputFormat};
use crate::output::{InputReport, Palette, output_results};

/// Lints every input and prints the findings. Returns true when any issue
/// was found.
pub fn run_lint(
    cli: &Cli,
    files: &[PathBuf],
    format: OutputFormat,
    color: ColorChoice,
) -> Result<bool> {
    let linter = Linter::new(load_config(cli.config.as_deref())?);
    let enabled: Vec<&str> = linter
        .config()
        .enabled_rules()
        .into_iter()
        .map(|rule| rule.id())
        .collect();
    debug!("Enabled rules: {}", enabled.join(", "));

    let inputs = Input::from_args(files);

    let mut results = Vec::with_capacity(inputs.len());
    for input in inputs {
        let report = match &input {
            Input::Stdin => {
                ensure_piped_stdin("no files provided and nothing on stdin")?;
                linter
                    .lint_reader(io::stdin().lock())
                    .into_diagnostic()
                    .wrap_err("error reading stdin")?
            }
            Input::File(path) => match linter.lint_file(path) {
                Ok(report) => report,
                Err(e) => {
                    debug!("Failed to lint {}: {:?}", path.display(), e);
                    eprintln!("error reading {}: {}", path.display(), e);
                    continue;
                }
            },
        };
        debug!("{}: {} issue(s)", input, report.len());
        results.push(InputReport { input, report });
    }

    let total = output_results(&results, format, &Palette::from_choice(color))?;
    if total > 0 {
        eprintln!("found {} issue(s)", total);
    }

    Ok(total > 0)
}
