#![deny(missing_docs)]

//! # Best-Practices Check
//!
//! Advisory conventions: document metadata that consumers rely on, and the
//! REST-ish shape of path templates (camelCase parameters, no trailing
//! slash, noun-based segments).

use crate::document::Document;
use crate::findings::{CheckPass, Finding, Reason};
use regex::Regex;

const PASS: CheckPass = CheckPass::Conventions;

/// Verb vocabulary flagged in path segments. Matching is whole-segment
/// only: `creative` or `getaway` never match.
const PATH_VERBS: [&str; 8] = [
    "get", "create", "update", "delete", "fetch", "list", "add", "remove",
];

/// Checks document metadata and path-shape conventions.
pub fn check(doc: &Document) -> Vec<Finding> {
    let mut findings = Vec::new();

    if doc.servers.is_none() {
        findings.push(Finding::new(
            PASS,
            Reason::NoServers,
            "No 'servers' defined (recommended to specify base URLs)",
        ));
    }

    if doc.tags.is_none() {
        findings.push(Finding::new(
            PASS,
            Reason::NoTags,
            "No 'tags' defined (recommended for API organization)",
        ));
    }

    let info = doc.info.as_ref();
    if info.map_or(true, |i| i.contact.is_none()) {
        findings.push(Finding::new(
            PASS,
            Reason::MissingContact,
            "No contact information in 'info' (recommended)",
        ));
    }
    if info.map_or(true, |i| i.license.is_none()) {
        findings.push(Finding::new(
            PASS,
            Reason::MissingLicense,
            "No license information in 'info' (consider adding)",
        ));
    }

    let Some(paths) = &doc.paths else {
        return findings;
    };

    let placeholder_re = Regex::new(r"\{([^}]+)}").expect("Invalid regex constant");

    for path in paths.keys() {
        for cap in placeholder_re.captures_iter(path) {
            let param = &cap[1];
            if param.to_uppercase() == param || param.contains('_') {
                findings.push(Finding::new(
                    PASS,
                    Reason::ParamNamingConvention,
                    format!("Path '{}': Parameter '{}' should use camelCase", path, param),
                ));
            }
        }

        if path.ends_with('/') && path != "/" {
            findings.push(Finding::new(
                PASS,
                Reason::TrailingSlash,
                format!("Path '{}': Avoid trailing slashes", path),
            ));
        }

        let lowered = path.to_lowercase();
        if lowered
            .split('/')
            .any(|segment| PATH_VERBS.contains(&segment))
        {
            findings.push(Finding::new(
                PASS,
                Reason::VerbInPath,
                format!("Path '{}': Avoid verbs in path (use HTTP methods instead)", path),
            ));
        }
    }

    findings
}
