use core::net::Ipv6Addr;

use crate::character_sets::{is_email_local_byte, is_host_char, is_phone_separator};
use crate::error::{ParseError, Result};
use crate::ipv4::is_ipv4;

/// Minimum number of digits for something to count as a phone number
const MIN_PHONE_DIGITS: usize = 3;

/// Check if a string is an email address: `local@domain.tld`.
/// Whitespace must already be removed.
pub fn is_email_address(address: &str) -> bool {
    let Some((local, domain)) = address.rsplit_once('@') else {
        return false;
    };
    is_email_local_part(local) && is_email_domain(domain)
}

fn is_email_local_part(local: &str) -> bool {
    !local.is_empty()
        && local.len() <= 64
        && local.bytes().all(is_email_local_byte)
        && !local.starts_with('.')
        && !local.ends_with('.')
        && !local.contains("..")
}

fn is_email_domain(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }

    let labels_ok = labels.iter().all(|label| {
        !label.is_empty()
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_alphanumeric() || c == '-')
    });

    let tld_ok = labels
        .last()
        .is_some_and(|tld| tld.chars().count() >= 2 && tld.chars().all(char::is_alphabetic));

    labels_ok && tld_ok
}

/// Check a phone number body and return it with every character except
/// the digits and a leading `+` removed.
///
/// Digits may be separated by spaces, `-`, `.`, `/` and parentheses.
pub fn normalize_phone_number(input: &str) -> Option<String> {
    let (plus, body) = match input.strip_prefix('+') {
        Some(rest) => ("+", rest),
        None => ("", input),
    };

    let mut number = String::with_capacity(input.len());
    number.push_str(plus);
    for c in body.chars() {
        if c.is_ascii_digit() {
            number.push(c);
        } else if !is_phone_separator(c) {
            return None;
        }
    }

    let digits = number.len() - plus.len();
    (digits >= MIN_PHONE_DIGITS).then_some(number)
}

/// Parse the digits after a host colon.
/// An empty port means no port; non-digits or overflow are rejected.
pub fn parse_port(port: &str) -> Result<Option<u32>> {
    if port.is_empty() {
        return Ok(None);
    }
    if !port.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidPort);
    }
    port.parse::<u32>()
        .map(Some)
        .map_err(|_| ParseError::InvalidPort)
}

/// `[...]` wrapped IPv6 address
pub fn is_ipv6_literal(host: &str) -> bool {
    host.strip_prefix('[')
        .and_then(|h| h.strip_suffix(']'))
        .is_some_and(|h| h.parse::<Ipv6Addr>().is_ok())
}

pub fn is_ip_address(host: &str) -> bool {
    is_ipv4(host) || is_ipv6_literal(host)
}

/// Check host name characters: alphanumerics, `-`, `.`, `_` and
/// non-ASCII labels. IPv6 literals are checked separately.
pub fn is_valid_host(host: &str) -> bool {
    if host.starts_with('[') {
        return is_ipv6_literal(host);
    }
    !host.is_empty() && host.chars().all(is_host_char)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_addresses() {
        assert!(is_email_address("foo@bar.com"));
        assert!(is_email_address("first.last+tag@sub.example.co.uk"));
        assert!(is_email_address("info@bücher.de"));
        assert!(!is_email_address("foo@bar"));
        assert!(!is_email_address("foo@bar.c"));
        assert!(!is_email_address("foo@bar.123"));
        assert!(!is_email_address("@bar.com"));
        assert!(!is_email_address(".foo@bar.com"));
        assert!(!is_email_address("fo..o@bar.com"));
        assert!(!is_email_address("foo@-bar.com"));
        assert!(!is_email_address("foo@bar..com"));
        assert!(!is_email_address("foo@bar@baz.com"));
        assert!(!is_email_address("foo bar@baz.com"));
    }

    #[test]
    fn test_phone_numbers() {
        assert_eq!(normalize_phone_number("+49 (0) 123-456"), Some("+490123456".into()));
        assert_eq!(normalize_phone_number("0123 456 789"), Some("0123456789".into()));
        assert_eq!(normalize_phone_number("12"), None);
        assert_eq!(normalize_phone_number("+1 800 FLOWERS"), None);
        assert_eq!(normalize_phone_number("12+34"), None);
        assert_eq!(normalize_phone_number(""), None);
    }

    #[test]
    fn test_parse_port() {
        assert_eq!(parse_port("80"), Ok(Some(80)));
        assert_eq!(parse_port("65536"), Ok(Some(65536)));
        assert_eq!(parse_port(""), Ok(None));
        assert_eq!(parse_port("abc"), Err(ParseError::InvalidPort));
        assert_eq!(parse_port("99999999999"), Err(ParseError::InvalidPort));
    }

    #[test]
    fn test_ip_addresses() {
        assert!(is_ip_address("127.0.0.1"));
        assert!(is_ip_address("[::1]"));
        assert!(is_ip_address("[2001:db8::1]"));
        assert!(!is_ip_address("::1"));
        assert!(!is_ip_address("[not-ipv6]"));
        assert!(!is_ip_address("localhost"));
    }

    #[test]
    fn test_valid_hosts() {
        assert!(is_valid_host("www.foo.com"));
        assert!(is_valid_host("my_host"));
        assert!(is_valid_host("bücher.de"));
        assert!(is_valid_host("[::1]"));
        assert!(!is_valid_host(""));
        assert!(!is_valid_host("foo<bar"));
        assert!(!is_valid_host("[::1"));
    }
}
