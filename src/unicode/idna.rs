use crate::error::{ParseError, Result};

/// Convert an internationalized host to its ASCII (Punycode) form.
/// ASCII hosts are only lowercased.
pub fn domain_to_ascii(domain: &str) -> Result<String> {
    if domain.is_ascii() {
        return Ok(domain.to_ascii_lowercase());
    }

    idna::domain_to_ascii(domain).map_err(|_| ParseError::IdnaError)
}
