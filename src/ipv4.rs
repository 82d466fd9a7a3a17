/// Strict dotted-decimal IPv4 parsing for host detection.
///
/// Unlike browsers, hex, octal and shortened forms are not accepted:
/// a bare `0x1` is a host name candidate, not an address.
use core::net::Ipv4Addr;

/// Parse exactly four decimal octets separated by dots.
/// Leading zeros are rejected (`01.2.3.4`) to avoid octal ambiguity.
pub fn parse_ipv4(input: &str) -> Option<Ipv4Addr> {
    let mut octets = [0u8; 4];
    let mut parts = input.split('.');

    for octet in &mut octets {
        *octet = parse_octet(parts.next()?)?;
    }

    if parts.next().is_some() {
        return None;
    }

    Some(Ipv4Addr::from(octets))
}

fn parse_octet(part: &str) -> Option<u8> {
    if part.is_empty() || part.len() > 3 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if part.len() > 1 && part.starts_with('0') {
        return None;
    }
    part.parse::<u8>().ok()
}

pub fn is_ipv4(input: &str) -> bool {
    parse_ipv4(input).is_some()
}
