#![deny(missing_docs)]

//! # APILint Core
//!
//! Core library for the OpenAPI 3.0 contract linter: the parsed document
//! model, six independent check passes, the severity classification policy,
//! and report aggregation. The crate performs no I/O beyond parsing
//! strings; loading files and rendering reports belong to the CLI.

/// Shared error types.
pub mod error;

/// Parsed document model (serde shims over JSON/YAML input).
pub mod document;

/// Finding records and severity classification.
pub mod findings;

/// The six check passes.
pub mod checks;

/// Engine entry point and report aggregation.
pub mod validator;

pub use document::{parse_document, Document, SpecFormat};
pub use error::{AppError, AppResult};
pub use findings::{CheckPass, Finding, Reason, Severity};
pub use validator::{validate, Outcome, Report};
