mod classify;
mod extract;

use classify::{Shape, classify};
use extract::extract_url;

use crate::error::{ParseError, Result};
use crate::helpers::sanitize;
use crate::query_params::QueryParams;
use crate::registry::Registry;
use crate::types::UrlType;
use crate::url_components::UrlComponents;

/// Outcome of parsing: the classification plus either fields or a reason
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed {
    pub url_type: UrlType,
    pub components: UrlComponents,
    pub error: Option<ParseError>,
}

impl Parsed {
    fn invalid(error: ParseError) -> Self {
        Self {
            url_type: UrlType::Invalid,
            components: UrlComponents::new(),
            error: Some(error),
        }
    }
}

fn components_for(shape: Shape<'_>) -> Result<(UrlType, UrlComponents)> {
    match shape {
        Shape::Fragment(fragment) => Ok((
            UrlType::Fragment,
            UrlComponents {
                fragment: fragment.to_string(),
                ..UrlComponents::new()
            },
        )),
        Shape::Email { address, query } => Ok((
            UrlType::Email,
            UrlComponents {
                scheme: "mailto".to_string(),
                path: address,
                query: query.map(QueryParams::parse).unwrap_or_default(),
                ..UrlComponents::new()
            },
        )),
        Shape::Phone(number) => Ok((
            UrlType::Phone,
            UrlComponents {
                scheme: "tel".to_string(),
                path: number,
                ..UrlComponents::new()
            },
        )),
        Shape::Url { scheme, rest } => Ok((UrlType::Url, extract_url(scheme, rest)?)),
    }
}

/// Sanitize, classify and extract. Never fails: problems end up in
/// [`Parsed::error`].
pub fn parse_input(raw: &str, registry: &Registry) -> Parsed {
    let sanitized = sanitize(raw);

    let result = classify(&sanitized, registry).and_then(components_for);

    match result {
        Ok((url_type, components)) => {
            tracing::debug!(input = raw, ?url_type, "classified URL input");
            Parsed {
                url_type,
                components,
                error: None,
            }
        }
        Err(error) => {
            tracing::debug!(input = raw, %error, "URL input is not valid");
            Parsed::invalid(error)
        }
    }
}
