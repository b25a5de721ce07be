//! Text output formatter

use mdr_core::Report;

use super::{InputReport, Palette};

pub fn output_text(results: &[InputReport], palette: &Palette) {
    for result in results {
        if let Some(block) = render_report(&result.input.to_string(), &result.report, palette) {
            // The block ends in a newline, so this leaves a blank line after it.
            println!("{}", block);
        }
    }
}

/// Renders the name of one input followed by one indented line per issue.
/// Returns `None` when there is nothing to report.
pub(super) fn render_report(name: &str, report: &Report, palette: &Palette) -> Option<String> {
    if report.is_empty() {
        return None;
    }

    let mut out = format!("{}\n", palette.file.apply_to(name));
    for issue in report {
        let severity = issue.severity();
        out.push_str(&format!(
            "  line {}: {} {} ({})\n",
            issue.line(),
            palette.severity(severity).apply_to(severity),
            issue.message(),
            issue.rule()
        ));
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_plain_block() {
        let report = mdr_core::lint(b"# A\n\nIntro.\n\n### B\n\n[x]()\n");
        let block = render_report("doc.md", &report, &Palette::plain()).unwrap();

        assert_eq!(
            block,
            "doc.md\n  line 5: warning heading level skipped from H1 to H3 (heading-hierarchy)\n  line 7: error link has empty destination (empty-link)\n"
        );
    }

    #[test]
    fn skips_clean_reports() {
        let report = mdr_core::lint(b"# Title\n\nBody.\n");
        assert_eq!(render_report("doc.md", &report, &Palette::plain()), None);
    }

    #[test]
    fn forced_colors_emit_escape_codes() {
        let palette = Palette::from_choice(crate::cli::ColorChoice::Always);
        let report = mdr_core::lint(b"[x]()\n");
        let block = render_report("doc.md", &report, &palette).unwrap();

        assert!(block.contains("\u{1b}["));
        assert!(block.contains("link has empty destination (empty-link)"));
    }
}
