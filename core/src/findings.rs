#![deny(missing_docs)]

//! # Findings
//!
//! Observation records emitted by the check passes, plus the severity
//! policy that classifies each reason code.
//!
//! Severity is attached at emission time as a pure function of the reason
//! code; the message string is a human-readable rendering only and is never
//! pattern-matched.

/// Severity of a single finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The document violates a requirement of the OpenAPI 3.0 specification.
    Error,
    /// The document is legal but diverges from a recommended convention.
    Warning,
}

/// Identifies which check pass produced a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckPass {
    /// Required top-level fields.
    Structure,
    /// Path keys and operations.
    Paths,
    /// Named component schemas.
    Schemas,
    /// Security scheme definitions.
    Security,
    /// Example coverage for bodies and success responses.
    Examples,
    /// Design conventions and best practices.
    Conventions,
}

/// Machine-readable reason codes, one per validated condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    /// The `openapi` version field is absent.
    MissingOpenapiField,
    /// The declared version is outside the supported `3.0.x` series.
    UnsupportedVersion,
    /// The `info` object is absent.
    MissingInfo,
    /// `info.title` is absent.
    MissingInfoTitle,
    /// `info.version` is absent.
    MissingInfoVersion,
    /// The `paths` object is absent.
    MissingPaths,
    /// The `paths` object is present but maps to no entries.
    EmptyPaths,

    /// A path key does not start with `/`.
    PathMissingLeadingSlash,
    /// A path declares no recognized HTTP method.
    PathWithoutOperations,
    /// An operation has no `responses` map.
    MissingResponses,
    /// An operation's `responses` map is present but empty.
    EmptyResponses,
    /// An operation has neither `summary` nor `description`.
    MissingSummary,
    /// An operation has no `operationId`.
    MissingOperationId,

    /// A schema carries none of `type`, `$ref`, `allOf`, `oneOf`, `anyOf`.
    SchemaMissingType,
    /// A schema has no `description`.
    SchemaMissingDescription,
    /// An object-typed schema defines no `properties`.
    ObjectSchemaWithoutProperties,

    /// The document declares no security schemes at all.
    NoSecuritySchemes,
    /// A security scheme has no `type`.
    SchemeMissingType,
    /// An `http` scheme has no `scheme` field.
    HttpSchemeMissingScheme,
    /// An `apiKey` scheme has no `name` field.
    ApiKeyMissingName,
    /// An `apiKey` scheme has no `in` field.
    ApiKeyMissingIn,
    /// An `oauth2` scheme has no `flows` object.
    OAuth2MissingFlows,

    /// A request-body media type carries no example.
    RequestBodyMissingExample,
    /// A success-response media type carries no example.
    ResponseMissingExample,

    /// The document has no `servers` list.
    NoServers,
    /// The document has no `tags` list.
    NoTags,
    /// `info.contact` is absent.
    MissingContact,
    /// `info.license` is absent.
    MissingLicense,
    /// A path parameter name is upper-case or snake_case.
    ParamNamingConvention,
    /// A non-root path ends with a trailing slash.
    TrailingSlash,
    /// A path segment is a verb rather than a noun.
    VerbInPath,
}

impl Reason {
    /// Severity policy: conditions that make the document structurally
    /// illegal are errors, everything else is advisory.
    ///
    /// Note the asymmetry in the security pass: declaring no schemes at all
    /// is legal (Warning), while a malformed scheme definition is not
    /// (Error).
    pub fn severity(self) -> Severity {
        match self {
            Reason::MissingOpenapiField
            | Reason::UnsupportedVersion
            | Reason::MissingInfo
            | Reason::MissingInfoTitle
            | Reason::MissingInfoVersion
            | Reason::MissingPaths
            | Reason::EmptyPaths
            | Reason::PathMissingLeadingSlash
            | Reason::MissingResponses
            | Reason::EmptyResponses
            | Reason::SchemeMissingType
            | Reason::HttpSchemeMissingScheme
            | Reason::ApiKeyMissingName
            | Reason::ApiKeyMissingIn
            | Reason::OAuth2MissingFlows => Severity::Error,
            _ => Severity::Warning,
        }
    }
}

/// A single observation reported by one check pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// Classified severity, derived from the reason code.
    pub severity: Severity,
    /// The pass that emitted this finding.
    pub pass: CheckPass,
    /// Machine-readable reason code.
    pub reason: Reason,
    /// Stable human-readable message embedding method/path/name context.
    pub message: String,
}

impl Finding {
    /// Builds a finding, deriving the severity from the reason code.
    pub fn new(pass: CheckPass, reason: Reason, message: impl Into<String>) -> Self {
        Finding {
            severity: reason.severity(),
            pass,
            reason,
            message: message.into(),
        }
    }
}
