#![deny(missing_docs)]

//! # Example Coverage Check
//!
//! Advisory only: request bodies and success-family responses should ship
//! an `example` or `examples` entry for every media type they declare.

use crate::document::{Document, Operation};
use crate::findings::{CheckPass, Finding, Reason};

const PASS: CheckPass = CheckPass::Examples;

/// Methods whose bodies and responses are held to example coverage.
const COVERED_METHODS: [&str; 5] = ["get", "post", "put", "patch", "delete"];

/// Checks example coverage for every covered operation in the document.
pub fn check(doc: &Document) -> Vec<Finding> {
    let mut findings = Vec::new();
    let Some(paths) = &doc.paths else {
        return findings;
    };

    for (path, item) in paths {
        for (method, operation) in item
            .operations()
            .filter(|(method, _)| COVERED_METHODS.contains(method))
        {
            check_operation(&mut findings, path, method, operation);
        }
    }

    findings
}

fn check_operation(findings: &mut Vec<Finding>, path: &str, method: &str, operation: &Operation) {
    let label = method.to_uppercase();

    if let Some(content) = operation
        .request_body
        .as_ref()
        .and_then(|body| body.content.as_ref())
    {
        // one warning per media type lacking coverage
        for media in content.values() {
            if media.example.is_none() && media.examples.is_none() {
                findings.push(Finding::new(
                    PASS,
                    Reason::RequestBodyMissingExample,
                    format!("{} {}: Request body missing example", label, path),
                ));
            }
        }
    }

    let Some(responses) = &operation.responses else {
        return;
    };
    for (status, response) in responses {
        if !status.starts_with('2') {
            continue;
        }
        let Some(content) = &response.content else {
            continue;
        };
        for media in content.values() {
            if media.example.is_none() && media.examples.is_none() {
                findings.push(Finding::new(
                    PASS,
                    Reason::ResponseMissingExample,
                    format!("{} {}: Response {} missing example", label, path, status),
                ));
            }
        }
    }
}
