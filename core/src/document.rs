#![deny(missing_docs)]

//! # Document Model
//!
//! Generic structures acting as an Intermediate Deserialization Layer.
//! These structs map directly to the OpenAPI 3.0 objects the check passes
//! inspect; everything else in the input is ignored.
//!
//! The model is built once per run and is read-only thereafter: no check
//! pass mutates it, which is what allows the passes to run in any order.

use crate::error::{AppError, AppResult};
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

/// HTTP method keys recognized as operations under a Path Item, in the
/// fixed order used for deterministic reporting.
pub const HTTP_METHODS: [&str; 7] = ["get", "post", "put", "patch", "delete", "options", "head"];

/// Input encodings accepted by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecFormat {
    /// JSON documents (`.json` files).
    Json,
    /// YAML documents (every other extension).
    Yaml,
}

impl SpecFormat {
    /// Selects the input format from the file extension: `.json` is JSON,
    /// anything else is treated as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => SpecFormat::Json,
            _ => SpecFormat::Yaml,
        }
    }
}

/// Parses a structured-text document into the validation model.
///
/// A syntax failure is an [`AppError::Load`]: it short-circuits all
/// validation and is reported distinctly from findings.
pub fn parse_document(content: &str, format: SpecFormat) -> AppResult<Document> {
    match format {
        SpecFormat::Json => {
            serde_json::from_str(content).map_err(|e| AppError::Load(e.to_string()))
        }
        SpecFormat::Yaml => {
            serde_yaml::from_str(content).map_err(|e| AppError::Load(e.to_string()))
        }
    }
}

/// Root of a parsed OpenAPI document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Document {
    /// Declared version, expected to be of the form `3.0.x`.
    pub openapi: Option<String>,
    /// The Info Object carrying title/version metadata.
    pub info: Option<Info>,
    /// Path templates mapped to their Path Item Objects.
    pub paths: Option<IndexMap<String, PathItem>>,
    /// The Components Object (schemas and security schemes).
    pub components: Option<Components>,
    /// Server list; the passes only test for presence.
    pub servers: Option<Vec<Value>>,
    /// Tag list; the passes only test for presence.
    pub tags: Option<Vec<Value>>,
}

/// The Info Object.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Info {
    /// API title, required by the specification.
    pub title: Option<String>,
    /// API version, required by the specification.
    pub version: Option<String>,
    /// Contact Object; presence only.
    pub contact: Option<Value>,
    /// License Object; presence only.
    pub license: Option<Value>,
}

/// A Path Item Object: the recognized HTTP method slots.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathItem {
    /// GET operation.
    pub get: Option<Operation>,
    /// POST operation.
    pub post: Option<Operation>,
    /// PUT operation.
    pub put: Option<Operation>,
    /// PATCH operation.
    pub patch: Option<Operation>,
    /// DELETE operation.
    pub delete: Option<Operation>,
    /// OPTIONS operation.
    pub options: Option<Operation>,
    /// HEAD operation.
    pub head: Option<Operation>,
}

impl PathItem {
    /// Iterates present operations as `(method, operation)` pairs following
    /// the [`HTTP_METHODS`] order.
    pub fn operations(&self) -> impl Iterator<Item = (&'static str, &Operation)> {
        [
            ("get", &self.get),
            ("post", &self.post),
            ("put", &self.put),
            ("patch", &self.patch),
            ("delete", &self.delete),
            ("options", &self.options),
            ("head", &self.head),
        ]
        .into_iter()
        .filter_map(|(method, op)| op.as_ref().map(|op| (method, op)))
    }

    /// Returns true when at least one recognized method key is present.
    pub fn has_operations(&self) -> bool {
        self.operations().next().is_some()
    }
}

/// An Operation Object.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Operation {
    /// Short summary; at least one of summary/description is recommended.
    pub summary: Option<String>,
    /// Longer description.
    pub description: Option<String>,
    /// Unique operation identifier, recommended.
    #[serde(rename = "operationId")]
    pub operation_id: Option<String>,
    /// Response map keyed by status-code string; required and non-empty.
    pub responses: Option<IndexMap<String, Response>>,
    /// Request body, when the operation accepts one.
    #[serde(rename = "requestBody")]
    pub request_body: Option<RequestBody>,
}

/// A Request Body Object.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestBody {
    /// Media types mapped to their Media Type Objects.
    pub content: Option<IndexMap<String, MediaTypeObject>>,
}

/// A Response Object.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Response {
    /// Media types mapped to their Media Type Objects.
    pub content: Option<IndexMap<String, MediaTypeObject>>,
}

/// A Media Type Object; only the example slots matter here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaTypeObject {
    /// Singular example value.
    pub example: Option<Value>,
    /// Named examples map.
    pub examples: Option<Value>,
}

/// The Components Object sections subject to validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Components {
    /// Named schema definitions.
    pub schemas: Option<IndexMap<String, Schema>>,
    /// Named security scheme definitions.
    #[serde(rename = "securitySchemes")]
    pub security_schemes: Option<IndexMap<String, SecurityScheme>>,
}

/// A Schema Object, reduced to the shape-level keywords the passes test.
///
/// Composition keywords are kept opaque: presence of any one is enough to
/// consider the schema discriminated, their contents are out of scope.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Schema {
    /// The `type` keyword.
    #[serde(rename = "type")]
    pub schema_type: Option<String>,
    /// A `$ref` indirection (never resolved here).
    #[serde(rename = "$ref")]
    pub reference: Option<Value>,
    /// The `allOf` composition keyword.
    #[serde(rename = "allOf")]
    pub all_of: Option<Value>,
    /// The `oneOf` composition keyword.
    #[serde(rename = "oneOf")]
    pub one_of: Option<Value>,
    /// The `anyOf` composition keyword.
    #[serde(rename = "anyOf")]
    pub any_of: Option<Value>,
    /// Human-readable description, recommended.
    pub description: Option<String>,
    /// Property map, required for `type: object` schemas.
    pub properties: Option<IndexMap<String, Value>>,
}

impl Schema {
    /// True when any of `type`, `$ref`, `allOf`, `oneOf`, `anyOf` is present.
    pub fn has_discriminating_keyword(&self) -> bool {
        self.schema_type.is_some()
            || self.reference.is_some()
            || self.all_of.is_some()
            || self.one_of.is_some()
            || self.any_of.is_some()
    }
}

/// A Security Scheme Object with its type-specific required fields.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SecurityScheme {
    /// Scheme type: `http`, `apiKey`, `oauth2`, or anything else
    /// (unrecognized types are not validated further).
    #[serde(rename = "type")]
    pub scheme_type: Option<String>,
    /// HTTP auth scheme name, required for `type: http`.
    pub scheme: Option<String>,
    /// Key name, required for `type: apiKey`.
    pub name: Option<String>,
    /// Key location, required for `type: apiKey`.
    #[serde(rename = "in")]
    pub location: Option<String>,
    /// Flow definitions, required for `type: oauth2`; presence only.
    pub flows: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_document() {
        let yaml = r#"
openapi: 3.0.0
info:
  title: Test API
  version: 1.0.0
paths:
  /users:
    get:
      operationId: listUsers
      responses:
        "200":
          description: ok
"#;
        let doc = parse_document(yaml, SpecFormat::Yaml).unwrap();
        assert_eq!(doc.openapi.as_deref(), Some("3.0.0"));
        assert_eq!(doc.info.as_ref().unwrap().title.as_deref(), Some("Test API"));
        let paths = doc.paths.as_ref().unwrap();
        let item = paths.get("/users").unwrap();
        assert!(item.has_operations());
        let (method, op) = item.operations().next().unwrap();
        assert_eq!(method, "get");
        assert_eq!(op.operation_id.as_deref(), Some("listUsers"));
        assert_eq!(op.responses.as_ref().unwrap().len(), 1);
    }

    #[test]
    fn test_parse_json_document() {
        let json = r#"{
            "openapi": "3.0.1",
            "info": {"title": "Test", "version": "1.0"},
            "paths": {}
        }"#;
        let doc = parse_document(json, SpecFormat::Json).unwrap();
        assert_eq!(doc.openapi.as_deref(), Some("3.0.1"));
        assert!(doc.paths.as_ref().unwrap().is_empty());
    }

    #[test]
    fn test_parse_failure_is_load_error() {
        let err = parse_document("{not json", SpecFormat::Json).unwrap_err();
        assert!(format!("{}", err).starts_with("Failed to load spec:"));
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            SpecFormat::from_path(Path::new("api.json")),
            SpecFormat::Json
        );
        assert_eq!(
            SpecFormat::from_path(Path::new("api.yaml")),
            SpecFormat::Yaml
        );
        assert_eq!(SpecFormat::from_path(Path::new("api.yml")), SpecFormat::Yaml);
        assert_eq!(SpecFormat::from_path(Path::new("api")), SpecFormat::Yaml);
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let yaml = r#"
openapi: 3.0.0
info: {title: T, version: "1.0", x-internal: true}
paths:
  /users:
    get:
      deprecated: true
      responses:
        "200": {description: ok}
"#;
        let doc = parse_document(yaml, SpecFormat::Yaml).unwrap();
        assert!(doc.paths.as_ref().unwrap().get("/users").is_some());
    }

    #[test]
    fn test_schema_discriminating_keywords() {
        let yaml = r#"
components:
  schemas:
    ByRef:
      $ref: '#/components/schemas/Other'
    Composed:
      allOf:
        - type: object
    Bare:
      description: nothing to see
"#;
        let doc = parse_document(yaml, SpecFormat::Yaml).unwrap();
        let schemas = doc.components.unwrap().schemas.unwrap();
        assert!(schemas["ByRef"].has_discriminating_keyword());
        assert!(schemas["Composed"].has_discriminating_keyword());
        assert!(!schemas["Bare"].has_discriminating_keyword());
    }

    #[test]
    fn test_document_order_preserved() {
        let yaml = r#"
paths:
  /zeta: {}
  /alpha: {}
  /mid: {}
"#;
        let doc = parse_document(yaml, SpecFormat::Yaml).unwrap();
        let keys: Vec<&String> = doc.paths.as_ref().unwrap().keys().collect();
        assert_eq!(keys, ["/zeta", "/alpha", "/mid"]);
    }
}
