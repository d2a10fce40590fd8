//! Errors that abort generation of a translation unit.
//!
//! No recoverable error arises from a well-formed type graph. Everything
//! here is either an invariant break in the upstream resolver or missing
//! environment data; either way the current translation unit must not be
//! emitted, so the error names the offending declaration and propagates
//! out of the collection pass.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CollectError {
    /// The enclosing-declaration chain never reached a top-level
    /// declaration within the allowed depth.
    #[error("declaration `{name}` has no top-level enclosing declaration")]
    NoTopLevelDeclaration { name: String },

    /// The header map has no entry for a declared type and its style
    /// cannot derive one.
    #[error("no header mapping for type `{qualified_name}`")]
    MissingHeader { qualified_name: String },

    /// A foreign type carries an empty display name.
    #[error("foreign type with empty display name (header {header:?})")]
    UnnamedForeignType { header: Option<String> },

    /// Type nesting exceeded the traversal limit; the graph contains a
    /// cycle through wrapper/array/foreign nesting.
    #[error("type nesting exceeds {limit} levels; the type graph is malformed")]
    NestingTooDeep { limit: usize },

    /// A header mapping document could not be parsed.
    #[error("invalid header mapping document: {0}")]
    InvalidHeaderMapping(#[from] serde_json::Error),

    /// A header mapping file could not be read.
    #[error("cannot read header mapping file: {0}")]
    HeaderMappingIo(#[from] std::io::Error),
}
