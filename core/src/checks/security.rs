#![deny(missing_docs)]

//! # Security Scheme Check
//!
//! Declaring no authentication at all is legal (a single document-wide
//! warning); a declared scheme missing its type-specific required fields is
//! malformed (errors). Unrecognized scheme types are left alone so newer
//! types do not produce noise.

use crate::document::Document;
use crate::findings::{CheckPass, Finding, Reason};

const PASS: CheckPass = CheckPass::Security;

/// Checks `components.securitySchemes` and every declared scheme.
pub fn check(doc: &Document) -> Vec<Finding> {
    let mut findings = Vec::new();
    let schemes = doc
        .components
        .as_ref()
        .and_then(|c| c.security_schemes.as_ref());

    let Some(schemes) = schemes.filter(|s| !s.is_empty()) else {
        findings.push(Finding::new(
            PASS,
            Reason::NoSecuritySchemes,
            "No security schemes defined (consider adding authentication)",
        ));
        return findings;
    };

    for (name, scheme) in schemes {
        let Some(scheme_type) = scheme.scheme_type.as_deref() else {
            findings.push(Finding::new(
                PASS,
                Reason::SchemeMissingType,
                format!("Security scheme '{}': Missing 'type'", name),
            ));
            continue;
        };

        match scheme_type {
            "http" => {
                if scheme.scheme.is_none() {
                    findings.push(Finding::new(
                        PASS,
                        Reason::HttpSchemeMissingScheme,
                        format!("Security scheme '{}': HTTP type requires 'scheme'", name),
                    ));
                }
            }
            "apiKey" => {
                // name and in are reported independently
                if scheme.name.is_none() {
                    findings.push(Finding::new(
                        PASS,
                        Reason::ApiKeyMissingName,
                        format!("Security scheme '{}': apiKey type requires 'name'", name),
                    ));
                }
                if scheme.location.is_none() {
                    findings.push(Finding::new(
                        PASS,
                        Reason::ApiKeyMissingIn,
                        format!("Security scheme '{}': apiKey type requires 'in'", name),
                    ));
                }
            }
            "oauth2" => {
                if scheme.flows.is_none() {
                    findings.push(Finding::new(
                        PASS,
                        Reason::OAuth2MissingFlows,
                        format!("Security scheme '{}': oauth2 type requires 'flows'", name),
                    ));
                }
            }
            _ => {} // forward-compatible: no rule to violate
        }
    }

    findings
}
