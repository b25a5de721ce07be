//! Output formatting module

mod json;
mod text;

use console::Style;
use mdr_core::{Report, Severity};
use miette::Result;

use crate::cli::{ColorChoice, OutputFormat};
use crate::commands::Input;

/// Lint result for one input.
pub struct InputReport {
    pub input: Input,
    pub report: Report,
}

/// Styles used by the text formatter.
#[derive(Debug, Clone)]
pub struct Palette {
    /// Input name header (bold).
    pub file: Style,
    /// `error` label (red).
    pub error: Style,
    /// `warning` label (yellow).
    pub warning: Style,
}

impl Palette {
    pub fn new() -> Self {
        Self {
            file: Style::new().bold(),
            error: Style::new().red(),
            warning: Style::new().yellow(),
        }
    }

    /// A palette that never emits escape codes.
    pub fn plain() -> Self {
        Self {
            file: Style::new(),
            error: Style::new(),
            warning: Style::new(),
        }
    }

    pub fn from_choice(choice: ColorChoice) -> Self {
        match choice {
            // Styles check the terminal themselves.
            ColorChoice::Auto => Self::new(),
            ColorChoice::Always => {
                let palette = Self::new();
                Self {
                    file: palette.file.force_styling(true),
                    error: palette.error.force_styling(true),
                    warning: palette.warning.force_styling(true),
                }
            }
            ColorChoice::Never => Self::plain(),
        }
    }

    pub fn severity(&self, severity: Severity) -> &Style {
        match severity {
            Severity::Error => &self.error,
            Severity::Warning => &self.warning,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

/// Prints the results and returns the total number of issues.
pub fn output_results(
    results: &[InputReport],
    format: OutputFormat,
    palette: &Palette,
) -> Result<usize> {
    match format {
        OutputFormat::Json => json::output_json(results)?,
        OutputFormat::Text => text::output_text(results, palette),
    }

    Ok(results.iter().map(|r| r.report.len()).sum())
}
