use crate::checkers::{is_email_address, normalize_phone_number};
use crate::error::{ParseError, Result};
use crate::helpers::prune_query;
use crate::ipv4::is_ipv4;
use crate::registry::Registry;
use crate::scheme::{DEFAULT_SCHEME, split_scheme};

/// Structural shape of a sanitized input, in precedence order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape<'a> {
    /// `#fragment`: the text after `#`
    Fragment(&'a str),
    /// Address with whitespace removed, and the raw mailto query
    Email {
        address: String,
        query: Option<&'a str>,
    },
    /// Digits with an optional leading `+`
    Phone(String),
    /// Lowercase scheme (`""` when unknown or absent) and everything after
    /// the scheme separator and its slashes
    Url { scheme: String, rest: &'a str },
}

/// Strip an ASCII case-insensitive prefix
fn strip_prefix_ignore_case<'a>(input: &'a str, prefix: &str) -> Option<&'a str> {
    input
        .get(..prefix.len())
        .filter(|head| head.eq_ignore_ascii_case(prefix))
        .map(|_| &input[prefix.len()..])
}

/// Lowercase the part after the last `@`; the local part keeps its case
fn lowercase_domain(address: &str) -> String {
    match address.rsplit_once('@') {
        Some((local, domain)) => format!("{local}@{}", domain.to_lowercase()),
        None => address.to_string(),
    }
}

fn classify_email(input: &str) -> Result<Option<Shape<'_>>> {
    let (has_scheme, body) = match strip_prefix_ignore_case(input, "mailto:") {
        Some(body) => (true, body),
        None => (false, input),
    };

    let (address, query) = prune_query(body);
    let address: String = address.chars().filter(|c| !c.is_whitespace()).collect();

    if is_email_address(&address) {
        return Ok(Some(Shape::Email {
            address: lowercase_domain(&address),
            query,
        }));
    }
    if has_scheme {
        return Err(ParseError::InvalidEmail);
    }
    Ok(None)
}

fn classify_phone(input: &str) -> Result<Option<Shape<'_>>> {
    if let Some(body) = strip_prefix_ignore_case(input, "tel:") {
        let body = body.trim_start_matches('/');
        return normalize_phone_number(body)
            .map(|number| Some(Shape::Phone(number)))
            .ok_or(ParseError::UnrecognizedFormat);
    }

    if input.starts_with('+') {
        return Ok(normalize_phone_number(input).map(Shape::Phone));
    }

    Ok(None)
}

/// Host of a scheme-less candidate: authority without user info and port
fn bare_host(input: &str) -> &str {
    let authority_end = memchr::memchr3(b'/', b'?', b'#', input.as_bytes()).unwrap_or(input.len());
    let authority = &input[..authority_end];
    let host_port = authority.rsplit_once('@').map_or(authority, |(_, host)| host);
    host_port.split_once(':').map_or(host_port, |(host, _)| host)
}

fn classify_url<'a>(input: &'a str, registry: &Registry) -> Option<Shape<'a>> {
    if let Some(rest) = input.strip_prefix("//") {
        return Some(Shape::Url {
            scheme: String::new(),
            rest: rest.trim_start_matches('/'),
        });
    }

    if let Some((token, rest)) = split_scheme(input) {
        if registry.has_scheme(token) {
            return Some(Shape::Url {
                scheme: token.to_ascii_lowercase(),
                rest: rest.trim_start_matches('/'),
            });
        }
        // Syntactically a scheme, just not one we know
        if let Some(rest) = rest.strip_prefix("//") {
            return Some(Shape::Url {
                scheme: String::new(),
                rest: rest.trim_start_matches('/'),
            });
        }
    }

    let host = bare_host(input);
    if registry.has_host(host) || is_ipv4(host) {
        return Some(Shape::Url {
            scheme: DEFAULT_SCHEME.to_string(),
            rest: input,
        });
    }

    None
}

/// Decide which shape a sanitized input has.
///
/// Order: fragment, email, phone number, URL. Anything else is
/// [`ParseError::UnrecognizedFormat`].
pub fn classify<'a>(input: &'a str, registry: &Registry) -> Result<Shape<'a>> {
    if input.is_empty() {
        return Err(ParseError::Empty);
    }

    if let Some(fragment) = input.strip_prefix('#') {
        if fragment.is_empty() {
            return Err(ParseError::UnrecognizedFormat);
        }
        return Ok(Shape::Fragment(fragment));
    }

    if let Some(shape) = classify_email(input)? {
        return Ok(shape);
    }

    if let Some(shape) = classify_phone(input)? {
        return Ok(shape);
    }

    classify_url(input, registry).ok_or(ParseError::UnrecognizedFormat)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn shape(input: &str) -> Result<Shape<'_>> {
        classify(input, &Registry::new())
    }

    #[test]
    fn test_fragment() {
        assert_eq!(shape("#foo"), Ok(Shape::Fragment("foo")));
        assert_eq!(shape("#"), Err(ParseError::UnrecognizedFormat));
        assert_eq!(shape("sometextbar#foo"), Err(ParseError::UnrecognizedFormat));
    }

    #[test]
    fn test_localhost_with_fragment_is_url() {
        assert_eq!(
            shape("localhost#foo"),
            Ok(Shape::Url {
                scheme: "https".into(),
                rest: "localhost#foo"
            })
        );
    }

    #[test]
    fn test_email() {
        let expected = Shape::Email {
            address: "foo@bar.com".into(),
            query: None,
        };
        assert_eq!(shape("foo@bar.com").unwrap(), expected);
        assert_eq!(shape("MAILTO:foo@bar.com").unwrap(), expected);
        assert_eq!(shape("mailto:foo @ bar.com").unwrap(), expected);
        assert_eq!(
            shape("mailto:foo@bar.com?subject=Hi").unwrap(),
            Shape::Email {
                address: "foo@bar.com".into(),
                query: Some("subject=Hi"),
            }
        );
        assert_eq!(shape("mailto:nobody"), Err(ParseError::InvalidEmail));
        assert_eq!(
            shape("Foo@BAR.Com").unwrap(),
            Shape::Email {
                address: "Foo@bar.com".into(),
                query: None,
            }
        );
    }

    #[test]
    fn test_phone() {
        assert_eq!(shape("tel:+49123456"), Ok(Shape::Phone("+49123456".into())));
        assert_eq!(shape("tel://+49 123 456"), Ok(Shape::Phone("+49123456".into())));
        assert_eq!(shape("+33 1 23 45"), Ok(Shape::Phone("+3312345".into())));
        assert_eq!(shape("tel:abc"), Err(ParseError::UnrecognizedFormat));
    }

    #[test]
    fn test_schemes() {
        assert_eq!(
            shape("HTTP:///www.foo.com"),
            Ok(Shape::Url {
                scheme: "http".into(),
                rest: "www.foo.com"
            })
        );
        assert_eq!(
            shape("fooscheme://bar.com"),
            Ok(Shape::Url {
                scheme: String::new(),
                rest: "bar.com"
            })
        );
        assert_eq!(
            shape("//cdn.foo.com/lib.js"),
            Ok(Shape::Url {
                scheme: String::new(),
                rest: "cdn.foo.com/lib.js"
            })
        );
        assert_eq!(shape("fooscheme:bar"), Err(ParseError::UnrecognizedFormat));
    }

    #[test]
    fn test_bare_hosts() {
        assert!(matches!(shape("localhost:8080/path"), Ok(Shape::Url { .. })));
        assert!(matches!(shape("user:pass@localhost"), Ok(Shape::Url { .. })));
        assert!(matches!(shape("192.168.0.1/admin"), Ok(Shape::Url { .. })));
        assert_eq!(shape("foohost"), Err(ParseError::UnrecognizedFormat));
        assert_eq!(shape("www.foo.com"), Err(ParseError::UnrecognizedFormat));
        assert_eq!(shape("<div>"), Err(ParseError::UnrecognizedFormat));
    }

    #[test]
    fn test_empty() {
        assert_eq!(shape(""), Err(ParseError::Empty));
    }
}
