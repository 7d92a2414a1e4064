#![deny(missing_docs)]

//! # Structure Check
//!
//! Verifies the three required top-level fields of an OpenAPI 3.0 document.
//! All three checks are independent; every applicable error is reported in
//! the same run.

use crate::document::Document;
use crate::findings::{CheckPass, Finding, Reason};

const PASS: CheckPass = CheckPass::Structure;

/// Checks `openapi`, `info` (with `title`/`version`), and `paths`.
pub fn check(doc: &Document) -> Vec<Finding> {
    let mut findings = Vec::new();

    match &doc.openapi {
        None => findings.push(Finding::new(
            PASS,
            Reason::MissingOpenapiField,
            "Missing required field: 'openapi'",
        )),
        Some(version) if !version.starts_with("3.0") => findings.push(Finding::new(
            PASS,
            Reason::UnsupportedVersion,
            format!("Unsupported OpenAPI version: {}", version),
        )),
        Some(_) => {}
    }

    match &doc.info {
        None => findings.push(Finding::new(
            PASS,
            Reason::MissingInfo,
            "Missing required field: 'info'",
        )),
        Some(info) => {
            if info.title.is_none() {
                findings.push(Finding::new(
                    PASS,
                    Reason::MissingInfoTitle,
                    "Missing required field: 'info.title'",
                ));
            }
            if info.version.is_none() {
                findings.push(Finding::new(
                    PASS,
                    Reason::MissingInfoVersion,
                    "Missing required field: 'info.version'",
                ));
            }
        }
    }

    match &doc.paths {
        None => findings.push(Finding::new(
            PASS,
            Reason::MissingPaths,
            "Missing required field: 'paths'",
        )),
        Some(paths) if paths.is_empty() => findings.push(Finding::new(
            PASS,
            Reason::EmptyPaths,
            "'paths' object is empty - at least one path is required",
        )),
        Some(_) => {}
    }

    findings
}
