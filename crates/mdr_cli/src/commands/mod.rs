//! Subcommand implementations

mod lint;
mod stats;

use std::fmt;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

use mdr_core::LinterConfig;
use miette::{IntoDiagnostic, Result};
use tracing::info;

pub use lint::run_lint;
pub use stats::run_stats;

/// A document source named on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    /// Resolves positional file arguments. No arguments, or a lone `-`,
    /// means standard input.
    pub fn from_args(files: &[PathBuf]) -> Vec<Input> {
        match files {
            [] => vec![Input::Stdin],
            [only] if only.as_os_str() == "-" => vec![Input::Stdin],
            _ => files.iter().cloned().map(Input::File).collect(),
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Stdin => f.write_str("<stdin>"),
            Input::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Fails when standard input is an interactive terminal rather than a pipe.
pub fn ensure_piped_stdin(message: &str) -> Result<()> {
    if io::stdin().is_terminal() {
        miette::bail!("{}", message);
    }
    Ok(())
}

/// Loads the configuration from `--config`, or from `.mdr.json` in the
/// working directory when present.
pub fn load_config(path: Option<&Path>) -> Result<LinterConfig> {
    if let Some(path) = path {
        return LinterConfig::from_file(path).into_diagnostic();
    }

    if let Some(path) = LinterConfig::discover(".") {
        info!("Using config: {}", path.display());
        return LinterConfig::from_file(&path).into_diagnostic();
    }

    info!("No config file found, using defaults");
    Ok(LinterConfig::new())
}
