#![deny(missing_docs)]

//! # Report Rendering
//!
//! Console layout for a validation run: an errors section, a warnings
//! section, and a summary line keyed on the three-way outcome.

use apilint_core::{Outcome, Report};
use std::fmt::Write;

/// Renders the findings sections and the summary line.
pub fn render(report: &Report) -> String {
    let mut out = String::new();

    if report.error_count() > 0 {
        out.push_str("\n\u{274c} ERRORS:\n");
        for finding in report.errors() {
            let _ = writeln!(out, "  - {}", finding.message);
        }
    }

    if report.warning_count() > 0 {
        out.push_str("\n\u{26a0}\u{fe0f}  WARNINGS:\n");
        for finding in report.warnings() {
            let _ = writeln!(out, "  - {}", finding.message);
        }
    }

    match report.outcome() {
        Outcome::Valid => {
            out.push_str("\n\u{2705} Specification is valid with no issues!\n");
        }
        Outcome::ValidWithWarnings => {
            let _ = writeln!(
                out,
                "\n\u{2705} Specification is valid ({} warnings)",
                report.warning_count()
            );
        }
        Outcome::Invalid => {
            let _ = writeln!(
                out,
                "\n\u{274c} Specification has {} errors and {} warnings",
                report.error_count(),
                report.warning_count()
            );
        }
    }

    out
}
