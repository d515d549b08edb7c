//! Text output formatter

use std::fmt::Write;

use termlint_core::{LintResult, LintSummary};

pub fn output_text(results: &[LintResult]) {
    print!("{}", render_text(results));
}

/// One `path:line:column  severity  message  rule` line per issue, then a
/// summary. Lines and columns are 1-based.
fn render_text(results: &[LintResult]) -> String {
    let mut out = String::new();

    for result in results {
        for diag in &result.diagnostics {
            let (line, column) = diag
                .loc
                .map_or((0, 0), |loc| (loc.start.line, loc.start.column + 1));
            let _ = writeln!(
                out,
                "{}:{}:{}  {}  {}  {}",
                result.path.display(),
                line,
                column,
                diag.severity,
                diag.message,
                diag.rule_id
            );
        }
    }

    let summary = LintSummary::from_results(results);
    let _ = writeln!(
        out,
        "\nChecked {} files, found {} issues",
        summary.files_checked, summary.total_diagnostics
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use termlint_core::{Diagnostic, Linter, LinterConfig};

    #[test]
    fn renders_issue_lines_and_summary() {
        let source = "first\nan id";
        let diagnostics = Linter::new(LinterConfig::default())
            .unwrap()
            .lint_text(source, "md")
            .unwrap();
        let results = vec![
            LintResult::new(PathBuf::from("docs/a.md"), diagnostics),
            LintResult::new(PathBuf::from("docs/b.md"), vec![]),
        ];

        assert_eq!(
            render_text(&results),
            "docs/a.md:2:4  error  Found term \"id\", use \"ID\" instead.  uppercase-terms\n\
             \nChecked 2 files, found 1 issues\n"
        );
    }

    #[test]
    fn renders_missing_location_as_zero() {
        let diag: Diagnostic = serde_json::from_value(serde_json::json!({
            "rule_id": "rule",
            "message": "msg",
            "span": { "start": 0, "end": 1 },
            "severity": "warning"
        }))
        .unwrap();
        let results = vec![LintResult::new(PathBuf::from("a.txt"), vec![diag])];

        assert!(render_text(&results).starts_with("a.txt:0:0  warning  msg  rule\n"));
    }
}
