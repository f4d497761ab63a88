use colored::Colorize;
use depdrift_core::{ComparisonReport, Provenance, Resolution};

/// Render the human-readable comparison report.
///
/// Pure formatting: all ordering comes from the report itself (sorted keys,
/// sorted value groups, input-order files), so output for fixed inputs is
/// stable across runs.
#[must_use]
pub fn render_report(report: &ComparisonReport) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Comparing {} unique dependencies across {} files...\n\n",
        report.key_count(),
        report.file_count()
    ));

    if report.divergent_count() > 0 {
        out.push_str(&format!("{}\n", "--- DIFFERENCES FOUND ---".bold()));
        for divergence in report.divergences() {
            out.push_str(&format!(
                "\nDifference found for: {}\n",
                divergence.key().bold()
            ));
            for group in divergence.groups() {
                match group.resolution() {
                    Resolution::Present(version) => {
                        out.push_str(&format!("  - Version '{}' found in:\n", version.yellow()));
                    }
                    Resolution::Absent => {
                        out.push_str(&format!("  - {}:\n", "Missing from".red()));
                    }
                }
                for location in group.locations() {
                    out.push_str(&format!("    - {}\n", render_location(location)));
                }
            }
            out.push_str(&format!("{}\n", "-".repeat(40)));
        }
        out.push_str(&format!("\n{}\n", "=".repeat(40)));
    }

    out.push_str("--- COMPARISON SUMMARY ---\n");
    let divergent = report.divergent_count().to_string();
    out.push_str(&format!(
        "Dependencies with differences: {}\n",
        if report.divergent_count() > 0 {
            divergent.red().bold()
        } else {
            divergent.green()
        }
    ));
    out.push_str(&format!(
        "Dependencies with consistent versions: {}\n",
        report.consistent_count().to_string().green()
    ));
    out.push_str(&format!("{}\n", "=".repeat(40)));
    out
}

fn render_location(location: &Provenance) -> String {
    match location.line() {
        Some(line) => format!("{} (line {line})", location.path().display()),
        None => format!("{} (not declared)", location.path().display()),
    }
}
