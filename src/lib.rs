//! Lenient URL inspection.
//!
//! [`UrlInfo`] takes a raw string (copied from a document, HTML attribute or
//! log line), classifies it as a URL, email address, phone number or
//! fragment, extracts its fields and produces a canonical normalized form
//! with sorted query parameters and a content hash.

// Internal modules (not public API)
mod character_sets;
mod checkers;
mod error;
mod hasher;
mod helpers;
mod ipv4;
mod normalizer;
mod parser;
mod query_params;
mod registry;
mod scheme;
mod types;
mod unicode;
mod url_base;
mod url_components;
mod url_info;

// Public API
pub use error::{ParseError, Result};
pub use query_params::QueryParams;
pub use registry::{
    Registry, add_host, add_scheme, global_registry, remove_host, remove_scheme, reset_registry,
};
pub use types::{Field, FieldValue, UnknownField, UrlType};
pub use url_base::UrlFields;
pub use url_components::UrlComponents;
pub use url_info::UrlInfo;
