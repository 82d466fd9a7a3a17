//! Canonical serialization of parsed fields.

use std::collections::BTreeMap;

use crate::types::UrlType;
use crate::unicode::idna::domain_to_ascii;
use crate::unicode::percent_encode::{
    RAW_COMPONENT_SET, percent_encode_into, percent_encode_userinfo,
};
use crate::url_components::UrlComponents;

/// How to serialize a parsed URL
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizeOptions<'a> {
    /// Leave out `user:pass@`
    pub without_auth: bool,
    /// Percent-encode non-ASCII characters and convert the host to Punycode
    pub encode_utf8: bool,
    /// Query parameters to leave out, with their reasons
    pub excluded: Option<&'a BTreeMap<String, String>>,
}

/// Serialize `components` according to the shape they were parsed as.
/// Invalid input serializes to an empty string.
pub fn normalize(url_type: UrlType, components: &UrlComponents, options: NormalizeOptions<'_>) -> String {
    match url_type {
        UrlType::Url => normalize_url(components, options),
        UrlType::Email => {
            let mut result = String::from("mailto:");
            match components.path.rsplit_once('@') {
                Some((local, domain)) if options.encode_utf8 => {
                    result.push_str(local);
                    result.push('@');
                    push_host(&mut result, domain, true);
                }
                _ => result.push_str(&components.path),
            }
            push_query(&mut result, components, options);
            result
        }
        UrlType::Phone => format!("tel://{}", components.path),
        UrlType::Fragment => {
            let mut result = String::from("#");
            percent_encode_into(&mut result, &components.fragment, RAW_COMPONENT_SET, options.encode_utf8);
            result
        }
        UrlType::Invalid => String::new(),
    }
}

fn normalize_url(components: &UrlComponents, options: NormalizeOptions<'_>) -> String {
    let mut result = String::with_capacity(components.host.len() + components.path.len() + 16);

    if !components.scheme.is_empty() {
        result.push_str(&components.scheme);
        result.push(':');
    }
    result.push_str("//");

    if !options.without_auth && components.has_credentials() {
        result.push_str(&percent_encode_userinfo(&components.user));
        if !components.pass.is_empty() {
            result.push(':');
            result.push_str(&percent_encode_userinfo(&components.pass));
        }
        result.push('@');
    }

    push_host(&mut result, &components.host, options.encode_utf8);

    if let Some(port) = components.port {
        result.push(':');
        result.push_str(&port.to_string());
    }

    percent_encode_into(&mut result, &components.path, RAW_COMPONENT_SET, options.encode_utf8);
    push_query(&mut result, components, options);

    if !components.fragment.is_empty() {
        result.push('#');
        percent_encode_into(&mut result, &components.fragment, RAW_COMPONENT_SET, options.encode_utf8);
    }

    result
}

/// Append a host, converted to Punycode when `encode_utf8` is set.
/// A host IDNA rejects is written unchanged.
fn push_host(result: &mut String, host: &str, encode_utf8: bool) {
    if !encode_utf8 {
        result.push_str(host);
        return;
    }
    match domain_to_ascii(host) {
        Ok(ascii) => result.push_str(&ascii),
        Err(error) => {
            tracing::debug!(host, %error, "keeping host as is");
            result.push_str(host);
        }
    }
}

fn push_query(result: &mut String, components: &UrlComponents, options: NormalizeOptions<'_>) {
    let query = components.query.serialize_filtered(
        |name| options.excluded.is_none_or(|excluded| !excluded.contains_key(name)),
        options.encode_utf8,
    );
    if !query.is_empty() {
        result.push('?');
        result.push_str(&query);
    }
}
