use crate::checkers::{is_valid_host, parse_port};
use crate::error::{ParseError, Result};
use crate::helpers::{prune_fragment, prune_query};
use crate::query_params::QueryParams;
use crate::unicode::percent_encode::percent_decode;
use crate::url_components::UrlComponents;

/// Split `host[:port]`, keeping bracketed IPv6 literals intact
fn split_host_port(host_port: &str) -> Result<(&str, Option<u32>)> {
    if host_port.starts_with('[') {
        let Some(bracket_end) = host_port.find(']') else {
            return Err(ParseError::InvalidHost);
        };
        let host = &host_port[..=bracket_end];
        return match &host_port[bracket_end + 1..] {
            "" => Ok((host, None)),
            rest => match rest.strip_prefix(':') {
                Some(port) => Ok((host, parse_port(port)?)),
                None => Err(ParseError::InvalidHost),
            },
        };
    }

    match host_port.split_once(':') {
        Some((host, port)) => Ok((host, parse_port(port)?)),
        None => Ok((host_port, None)),
    }
}

/// Split user info at the first `:` and percent-decode both halves
fn split_user_info(user_info: &str) -> (String, String) {
    let (user, pass) = user_info.split_once(':').unwrap_or((user_info, ""));
    (percent_decode(user), percent_decode(pass))
}

/// Extract the fields of a URL-shaped input.
///
/// `rest` is everything after `scheme:` and its slashes:
/// `[user[:pass]@]host[:port][/path][?query][#fragment]`.
pub fn extract_url(scheme: String, rest: &str) -> Result<UrlComponents> {
    let (before_fragment, fragment) = prune_fragment(rest);
    let (before_query, query) = prune_query(before_fragment);

    let authority_end = memchr::memchr(b'/', before_query.as_bytes()).unwrap_or(before_query.len());
    let (authority, path) = before_query.split_at(authority_end);

    let (user_info, host_port) = match authority.rsplit_once('@') {
        Some((user_info, host_port)) => (Some(user_info), host_port),
        None => (None, authority),
    };

    let (host, port) = split_host_port(host_port)?;
    if host.is_empty() {
        return Err(ParseError::MissingHost);
    }
    if !is_valid_host(host) {
        return Err(ParseError::InvalidHost);
    }

    let (user, pass) = user_info.map(split_user_info).unwrap_or_default();

    Ok(UrlComponents {
        scheme,
        user,
        pass,
        host: host.to_lowercase(),
        port,
        path: path.to_string(),
        query: query.map(QueryParams::parse).unwrap_or_default(),
        fragment: fragment.unwrap_or_default().to_string(),
    })
}
