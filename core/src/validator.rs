#![deny(missing_docs)]

//! # Validation Engine
//!
//! Runs the six check passes over a parsed document in a fixed order and
//! aggregates their findings into a [`Report`]. The passes are pure
//! functions over the read-only model, so identical input always yields a
//! byte-identical ordered finding list.

use crate::checks;
use crate::document::Document;
use crate::findings::{Finding, Severity};

/// Run-level verdict, derived solely from the presence of error findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No findings at all.
    Valid,
    /// No errors, at least one warning.
    ValidWithWarnings,
    /// At least one error.
    Invalid,
}

/// The ordered findings of one validation run.
///
/// Findings keep pass order (structure, paths, schemas, security, examples,
/// conventions) and within-pass emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    findings: Vec<Finding>,
}

impl Report {
    /// All findings in emission order.
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// Error-severity findings in emission order.
    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Error)
    }

    /// Warning-severity findings in emission order.
    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Warning)
    }

    /// Number of error findings.
    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    /// Number of warning findings.
    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    /// The three-way verdict driving the caller's exit status.
    pub fn outcome(&self) -> Outcome {
        if self.error_count() > 0 {
            Outcome::Invalid
        } else if self.warning_count() > 0 {
            Outcome::ValidWithWarnings
        } else {
            Outcome::Valid
        }
    }
}

/// Runs every check pass over the document and aggregates the findings.
pub fn validate(doc: &Document) -> Report {
    let passes: [fn(&Document) -> Vec<Finding>; 6] = [
        checks::structure::check,
        checks::paths::check,
        checks::schemas::check,
        checks::security::check,
        checks::examples::check,
        checks::conventions::check,
    ];

    let mut findings = Vec::new();
    for pass in passes {
        findings.extend(pass(doc));
    }

    Report { findings }
}
