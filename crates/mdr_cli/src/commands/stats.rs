//! Stats command implementation

use std::io;
use std::path::PathBuf;

use mdr_core::Stats;
use miette::{IntoDiagnostic, Result, WrapErr};

use super::{Input, ensure_piped_stdin};
use crate::cli::ColorChoice;
use crate::output::Palette;

pub fn run_stats(file: Option<&PathBuf>, color: ColorChoice) -> Result<bool> {
    let input = match file {
        Some(path) if path.as_os_str() != "-" => Input::File(path.clone()),
        _ => Input::Stdin,
    };

    let stats = match &input {
        Input::Stdin => {
            ensure_piped_stdin("no file provided and nothing on stdin")?;
            Stats::from_reader(io::stdin().lock())
                .into_diagnostic()
                .wrap_err("error reading stdin")?
        }
        Input::File(path) => Stats::from_file(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("error reading {}", path.display()))?,
    };

    let palette = Palette::from_choice(color);
    println!("{}", palette.file.apply_to(&input));
    println!("{}", stats);

    Ok(false)
}
