//! Error types for facet configuration.
//!
//! The engines themselves never fail: malformed state degrades to "no
//! constraint" and unknown fields to "never matches". Errors exist only
//! for explicit configuration validation.

use thiserror::Error;

use crate::config::FacetKind;

/// Errors reported by [`FacetConfig::validate`](crate::FacetConfig::validate).
#[derive(Debug, Error)]
pub enum FacetError {
    /// Two facets declare the same field key.
    #[error("duplicate facet key '{0}'")]
    DuplicateKey(String),

    /// A select facet was declared without any options.
    #[error("facet '{key}' is {kind} and needs at least one option")]
    EmptyOptions {
        /// The offending facet's field key.
        key: String,
        /// The declared kind.
        kind: FacetKind,
    },
}

/// Result type for facet configuration.
pub type Result<T> = std::result::Result<T, FacetError>;
