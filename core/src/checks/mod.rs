#![deny(missing_docs)]

//! # Check Passes
//!
//! Six independent validation passes over the read-only document model.
//! Each pass is a pure function `&Document -> Vec<Finding>`: passes share
//! no state, never short-circuit each other, and one pass's errors never
//! prevent another pass from running.

/// Required top-level fields (`openapi`, `info`, `paths`).
pub mod structure;

/// Path keys and the operations beneath them.
pub mod paths;

/// Named schemas under `components.schemas`.
pub mod schemas;

/// Security scheme definitions under `components.securitySchemes`.
pub mod security;

/// Example coverage for request bodies and success responses.
pub mod examples;

/// Design conventions: metadata, parameter naming, path shape.
pub mod conventions;
