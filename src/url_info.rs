use core::convert::Infallible;
use core::fmt;
use core::str::FromStr;
use std::collections::BTreeMap;

use crate::checkers::is_ip_address;
use crate::error::ParseError;
use crate::hasher::hash_normalized;
use crate::normalizer::{NormalizeOptions, normalize};
use crate::parser::{Parsed, parse_input};
use crate::registry::{Registry, with_global};
use crate::scheme::is_secure_scheme;
use crate::types::UrlType;
use crate::url_base::UrlFields;
use crate::url_components::UrlComponents;

/// A parsed URL, email address, phone number or fragment.
///
/// Parsing happens eagerly and never fails: an unusable string produces
/// an invalid instance whose [`error`](Self::error) says why.
///
/// # Examples
///
/// ```
/// use urlinfo::{UrlFields, UrlInfo};
///
/// let info = UrlInfo::parse("https://foo.com?param3=dog&param1=foo");
/// assert!(info.is_valid());
/// assert_eq!(info.host(), "foo.com");
/// assert_eq!(info.normalized(), "https://foo.com?param1=foo&param3=dog");
///
/// let invalid = UrlInfo::parse("Foo and bar jump over the fox");
/// assert!(!invalid.is_valid());
/// assert_eq!(invalid.normalized(), "");
/// ```
#[derive(Debug, Clone)]
pub struct UrlInfo {
    raw: String,
    url_type: UrlType,
    components: UrlComponents,
    error: Option<ParseError>,
    excluded: BTreeMap<String, String>,
    exclusion_enabled: bool,
    encode_utf8: bool,
}

impl UrlInfo {
    /// Parse against the process-wide scheme and host registry
    pub fn parse(raw: &str) -> Self {
        with_global(|registry| Self::parse_with(raw, registry))
    }

    /// Parse against an explicit registry
    pub fn parse_with(raw: &str, registry: &Registry) -> Self {
        let Parsed {
            url_type,
            components,
            error,
        } = parse_input(raw, registry);

        Self {
            raw: raw.to_string(),
            url_type,
            components,
            error,
            excluded: BTreeMap::new(),
            exclusion_enabled: false,
            encode_utf8: false,
        }
    }

    /// Check if a string is recognized, without keeping the result
    pub fn can_parse(raw: &str) -> bool {
        Self::parse(raw).is_valid()
    }

    /// The string as passed to the parser
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn is_valid(&self) -> bool {
        self.url_type.is_valid()
    }

    /// Why the input was rejected, `None` when valid
    pub fn error(&self) -> Option<ParseError> {
        self.error
    }

    /// Human readable rejection reason, empty when valid
    pub fn error_message(&self) -> String {
        self.error.map(|e| e.to_string()).unwrap_or_default()
    }

    pub fn url_type(&self) -> UrlType {
        self.url_type
    }

    pub fn type_label(&self) -> &'static str {
        self.url_type.label()
    }

    /// Parsed fields
    pub fn components(&self) -> &UrlComponents {
        &self.components
    }

    pub fn is_url(&self) -> bool {
        self.url_type == UrlType::Url
    }

    pub fn is_email(&self) -> bool {
        self.url_type == UrlType::Email
    }

    pub fn is_phone_number(&self) -> bool {
        self.url_type == UrlType::Phone
    }

    /// Fragment-only input such as `#top`
    pub fn is_anchor(&self) -> bool {
        self.url_type == UrlType::Fragment
    }

    pub fn is_secure(&self) -> bool {
        is_secure_scheme(&self.components.scheme)
    }

    pub fn has_ip_address(&self) -> bool {
        self.is_url() && is_ip_address(&self.components.host)
    }

    /// Address of an email, without `mailto:`
    pub fn email_address(&self) -> Option<&str> {
        self.is_email().then_some(self.components.path.as_str())
    }

    /// Digits of a phone number with an optional leading `+`
    pub fn phone_number(&self) -> Option<&str> {
        self.is_phone_number()
            .then_some(self.components.path.as_str())
    }

    fn is_param_visible(&self, name: &str) -> bool {
        !self.exclusion_enabled || !self.excluded.contains_key(name)
    }

    /// Query parameters sorted by name, without excluded ones while
    /// exclusion is enabled
    pub fn params(&self) -> Vec<(&str, &str)> {
        self.components
            .query
            .sorted()
            .into_iter()
            .filter(|(name, _)| self.is_param_visible(name))
            .collect()
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        if !self.is_param_visible(name) {
            return None;
        }
        self.components.query.get(name)
    }

    pub fn has_param(&self, name: &str) -> bool {
        self.param(name).is_some()
    }

    pub fn count_params(&self) -> usize {
        self.params().len()
    }

    pub fn has_query(&self) -> bool {
        self.count_params() > 0
    }

    fn options(&self) -> NormalizeOptions<'_> {
        NormalizeOptions {
            without_auth: false,
            encode_utf8: self.encode_utf8,
            excluded: self.exclusion_enabled.then_some(&self.excluded),
        }
    }

    /// Canonical form: lowercase scheme and host, parameters sorted by
    /// name. Empty for invalid input.
    pub fn normalized(&self) -> String {
        normalize(self.url_type, &self.components, self.options())
    }

    /// Canonical form without `user:pass@`, safe to display or log
    pub fn normalized_without_auth(&self) -> String {
        let options = NormalizeOptions {
            without_auth: true,
            ..self.options()
        };
        normalize(self.url_type, &self.components, options)
    }

    /// SHA-256 of the normalized form as lowercase hex
    pub fn hash(&self) -> String {
        hash_normalized(&self.normalized())
    }

    /// Only URLs and emails carry query parameters
    fn accepts_params(&self) -> bool {
        matches!(self.url_type, UrlType::Url | UrlType::Email)
    }

    /// Add or overwrite a query parameter
    pub fn set_param(&mut self, name: &str, value: &str) -> &mut Self {
        if self.accepts_params() {
            self.components.query.set(name, value);
        }
        self
    }

    /// Remove a query parameter; unknown names are ignored
    pub fn remove_param(&mut self, name: &str) -> &mut Self {
        if self.accepts_params() {
            self.components.query.remove(name);
        }
        self
    }

    /// Hide a parameter from the normalized form and the parameter list.
    /// Turns exclusion on. The reason is informational only.
    pub fn exclude_param(&mut self, name: &str, reason: &str) -> &mut Self {
        if self.accepts_params() {
            self.excluded.insert(name.to_string(), reason.to_string());
            self.exclusion_enabled = true;
        }
        self
    }

    /// Turn hiding of excluded parameters on or off. The excluded set is kept.
    pub fn set_param_exclusion(&mut self, enabled: bool) -> &mut Self {
        if self.accepts_params() {
            self.exclusion_enabled = enabled;
        }
        self
    }

    pub fn is_param_exclusion_enabled(&self) -> bool {
        self.exclusion_enabled
    }

    /// Check if exclusion is on and hides at least one present parameter
    pub fn contains_excluded_params(&self) -> bool {
        self.exclusion_enabled
            && self
                .components
                .query
                .names()
                .any(|name| self.excluded.contains_key(name))
    }

    /// Excluded parameters present in the query, with their reasons
    pub fn excluded_params(&self) -> Vec<(&str, &str)> {
        self.excluded
            .iter()
            .filter(|(name, _)| self.components.query.contains(name))
            .map(|(name, reason)| (name.as_str(), reason.as_str()))
            .collect()
    }

    /// Percent-encode non-ASCII characters (and Punycode the host) in
    /// the normalized form
    pub fn set_utf_encoding(&mut self, enabled: bool) -> &mut Self {
        self.encode_utf8 = enabled;
        self
    }

    pub fn is_utf_encoding_enabled(&self) -> bool {
        self.encode_utf8
    }
}

impl UrlFields for UrlInfo {
    fn scheme(&self) -> &str {
        &self.components.scheme
    }

    fn user(&self) -> &str {
        &self.components.user
    }

    fn password(&self) -> &str {
        &self.components.pass
    }

    fn host(&self) -> &str {
        &self.components.host
    }

    fn port(&self) -> i64 {
        self.components.port_or_sentinel()
    }

    fn path(&self) -> &str {
        &self.components.path
    }

    fn query(&self) -> String {
        self.components
            .query
            .serialize_filtered(|name| self.is_param_visible(name), self.encode_utf8)
    }

    fn fragment(&self) -> &str {
        &self.components.fragment
    }
}

impl fmt::Display for UrlInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized())
    }
}

impl FromStr for UrlInfo {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for UrlInfo {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

/// Equal when the normalized forms are equal
impl PartialEq for UrlInfo {
    fn eq(&self, other: &Self) -> bool {
        self.normalized() == other.normalized()
    }
}

impl Eq for UrlInfo {}

impl core::hash::Hash for UrlInfo {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.normalized().hash(state);
    }
}
