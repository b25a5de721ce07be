//! JSON output formatter

use miette::{IntoDiagnostic, Result};

use super::InputReport;

pub fn output_json(results: &[InputReport]) -> Result<()> {
    println!("{}", render_json(results)?);
    Ok(())
}

fn render_json(results: &[InputReport]) -> Result<String> {
    let output: Vec<_> = results
        .iter()
        .map(|r| {
            serde_json::json!({
                "path": r.input.to_string(),
                "issues": r.report,
            })
        })
        .collect();
    serde_json::to_string_pretty(&output).into_diagnostic()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::Input;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    #[test]
    fn renders_every_input() {
        let results = vec![
            InputReport {
                input: Input::File(PathBuf::from("a.md")),
                report: mdr_core::lint(b"[x]()\n"),
            },
            InputReport {
                input: Input::Stdin,
                report: mdr_core::lint(b""),
            },
        ];

        let value: serde_json::Value =
            serde_json::from_str(&render_json(&results).unwrap()).unwrap();

        assert_eq!(
            value,
            serde_json::json!([
                {
                    "path": "a.md",
                    "issues": [{
                        "rule": "empty-link",
                        "message": "link has empty destination",
                        "line": 1,
                        "severity": "error"
                    }]
                },
                { "path": "<stdin>", "issues": [] }
            ])
        );
    }
}
