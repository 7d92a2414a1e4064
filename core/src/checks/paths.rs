#![deny(missing_docs)]

//! # Path/Operation Check
//!
//! Validates path keys and the operations declared beneath them. Path keys
//! must be rooted; operations must declare at least one response and are
//! expected to carry documentation and an `operationId`.

use crate::document::Document;
use crate::findings::{CheckPass, Finding, Reason};

const PASS: CheckPass = CheckPass::Paths;

/// Checks every path key and every recognized operation under it.
pub fn check(doc: &Document) -> Vec<Finding> {
    let mut findings = Vec::new();
    let Some(paths) = &doc.paths else {
        return findings;
    };

    for (path, item) in paths {
        if !path.starts_with('/') {
            findings.push(Finding::new(
                PASS,
                Reason::PathMissingLeadingSlash,
                format!("Path '{}' must start with '/'", path),
            ));
        }

        if !item.has_operations() {
            findings.push(Finding::new(
                PASS,
                Reason::PathWithoutOperations,
                format!("Path '{}' has no operations defined", path),
            ));
        }

        for (method, operation) in item.operations() {
            let label = method.to_uppercase();

            match &operation.responses {
                None => findings.push(Finding::new(
                    PASS,
                    Reason::MissingResponses,
                    format!("{} {}: Missing 'responses'", label, path),
                )),
                Some(responses) if responses.is_empty() => findings.push(Finding::new(
                    PASS,
                    Reason::EmptyResponses,
                    format!("{} {}: 'responses' is empty", label, path),
                )),
                Some(_) => {}
            }

            if operation.summary.is_none() && operation.description.is_none() {
                findings.push(Finding::new(
                    PASS,
                    Reason::MissingSummary,
                    format!("{} {}: Missing 'summary' or 'description'", label, path),
                ));
            }

            if operation.operation_id.is_none() {
                findings.push(Finding::new(
                    PASS,
                    Reason::MissingOperationId,
                    format!("{} {}: Missing 'operationId' (recommended)", label, path),
                ));
            }
        }
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{parse_document, SpecFormat};
    use crate::findings::Severity;

    fn run(yaml: &str) -> Vec<Finding> {
        check(&parse_document(yaml, SpecFormat::Yaml).unwrap())
    }

    #[test]
    fn test_fully_documented_operation_passes() {
        let findings = run(r#"
paths:
  /users:
    get:
      summary: List users
      operationId: listUsers
      responses: {"200": {description: ok}}
"#);
        assert!(findings.is_empty());
    }

    #[test]
    fn test_path_must_start_with_slash() {
        let findings = run(r#"
paths:
  users:
    get:
      summary: s
      operationId: i
      responses: {"200": {description: ok}}
"#);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].reason, Reason::PathMissingLeadingSlash);
        assert_eq!(findings[0].severity, Severity::Error);
        assert_eq!(findings[0].message, "Path 'users' must start with '/'");
    }

    #[test]
    fn test_operation_less_path_is_a_warning() {
        let findings = run("paths: {/orphan: {}}");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].reason, Reason::PathWithoutOperations);
        assert_eq!(findings[0].severity, Severity::Warning);
    }

    #[test]
    fn test_missing_responses_names_method_and_path() {
        let findings = run(r#"
paths:
  /users:
    post:
      summary: s
      operationId: i
"#);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].reason, Reason::MissingResponses);
        assert_eq!(findings[0].message, "POST /users: Missing 'responses'");
    }

    #[test]
    fn test_empty_responses_is_a_distinct_error() {
        let findings = run(r#"
paths:
  /users:
    delete:
      summary: s
      operationId: i
      responses: {}
"#);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].reason, Reason::EmptyResponses);
        assert_eq!(findings[0].message, "DELETE /users: 'responses' is empty");
    }

    #[test]
    fn test_adding_responses_removes_only_that_error() {
        let without = run("paths: {/users: {get: {}}}");
        let with = run(r#"paths: {/users: {get: {responses: {"200": {description: ok}}}}}"#);

        assert!(without.iter().any(|f| f.reason == Reason::MissingResponses));
        assert!(!with.iter().any(|f| f.reason == Reason::MissingResponses));
        // the unrelated advisory findings survive unchanged
        for reason in [Reason::MissingSummary, Reason::MissingOperationId] {
            assert!(without.iter().any(|f| f.reason == reason));
            assert!(with.iter().any(|f| f.reason == reason));
        }
    }

    #[test]
    fn test_description_satisfies_summary_check() {
        let findings = run(r#"
paths:
  /users:
    get:
      description: Detailed text
      operationId: listUsers
      responses: {"200": {description: ok}}
"#);
        assert!(findings.is_empty());
    }

    #[test]
    fn test_undocumented_operation_two_warnings() {
        let findings = run(r#"paths: {/users: {get: {responses: {"200": {description: ok}}}}}"#);
        let reasons: Vec<Reason> = findings.iter().map(|f| f.reason).collect();
        assert_eq!(reasons, [Reason::MissingSummary, Reason::MissingOperationId]);
        assert!(findings.iter().all(|f| f.severity == Severity::Warning));
    }

    #[test]
    fn test_every_recognized_method_is_visited() {
        let findings = run(r#"
paths:
  /users:
    get: {summary: s, operationId: a, responses: {"200": {description: ok}}}
    post: {summary: s, operationId: b}
    head: {summary: s, operationId: c}
"#);
        let messages: Vec<&str> = findings.iter().map(|f| f.message.as_str()).collect();
        assert_eq!(
            messages,
            [
                "POST /users: Missing 'responses'",
                "HEAD /users: Missing 'responses'"
            ]
        );
    }
}
