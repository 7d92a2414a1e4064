#![deny(missing_docs)]

//! # Schema Check
//!
//! Advisory checks over the named schemas in `components.schemas`. Schema
//! keyword semantics are out of scope; only presence/shape is examined.

use crate::document::Document;
use crate::findings::{CheckPass, Finding, Reason};

const PASS: CheckPass = CheckPass::Schemas;

/// Checks every named entry under `components.schemas`.
pub fn check(doc: &Document) -> Vec<Finding> {
    let mut findings = Vec::new();
    let Some(schemas) = doc.components.as_ref().and_then(|c| c.schemas.as_ref()) else {
        return findings;
    };

    for (name, schema) in schemas {
        if !schema.has_discriminating_keyword() {
            findings.push(Finding::new(
                PASS,
                Reason::SchemaMissingType,
                format!("Schema '{}': Missing 'type' property", name),
            ));
        }

        if schema.description.is_none() {
            findings.push(Finding::new(
                PASS,
                Reason::SchemaMissingDescription,
                format!("Schema '{}': Missing 'description' (recommended)", name),
            ));
        }

        if schema.schema_type.as_deref() == Some("object") && schema.properties.is_none() {
            findings.push(Finding::new(
                PASS,
                Reason::ObjectSchemaWithoutProperties,
                format!("Schema '{}': Object type but no 'properties' defined", name),
            ));
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
    fn test_complete_schema_passes() {
        let findings = run(r#"
components:
  schemas:
    User:
      type: object
      description: A user record
      properties:
        id: {type: integer}
"#);
        assert!(findings.is_empty());
    }

    #[test]
    fn test_no_components_section_is_silent() {
        assert!(run("openapi: 3.0.0").is_empty());
    }

    #[test]
    fn test_schema_without_discriminating_keyword() {
        let findings = run(r#"
components:
  schemas:
    Mystery:
      description: no shape at all
"#);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].reason, Reason::SchemaMissingType);
        assert_eq!(findings[0].severity, Severity::Warning);
        assert_eq!(findings[0].message, "Schema 'Mystery': Missing 'type' property");
    }

    #[test]
    fn test_composition_keyword_suppresses_type_warning() {
        for keyword in ["allOf", "oneOf", "anyOf"] {
            let yaml = format!(
                "components:\n  schemas:\n    Composed:\n      description: d\n      {}:\n        - type: string\n",
                keyword
            );
            assert!(run(&yaml).is_empty(), "{} should count as a type", keyword);
        }
    }

    #[test]
    fn test_ref_suppresses_type_warning() {
        let findings = run(r#"
components:
  schemas:
    Alias:
      description: d
      $ref: '#/components/schemas/User'
"#);
        assert!(findings.is_empty());
    }

    #[test]
    fn test_missing_description() {
        let findings = run(r#"
components:
  schemas:
    User: {type: string}
"#);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].reason, Reason::SchemaMissingDescription);
    }

    #[test]
    fn test_object_without_properties() {
        let findings = run(r#"
components:
  schemas:
    Bag:
      type: object
      description: d
"#);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].reason, Reason::ObjectSchemaWithoutProperties);
        assert_eq!(
            findings[0].message,
            "Schema 'Bag': Object type but no 'properties' defined"
        );
    }

    #[test]
    fn test_non_object_type_needs_no_properties() {
        let findings = run(r#"
components:
  schemas:
    Name: {type: string, description: d}
"#);
        assert!(findings.is_empty());
    }
}
