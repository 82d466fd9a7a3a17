use core::fmt;
use core::str::FromStr;

/// Shape a parsed string was classified as.
///
/// The classes are mutually exclusive and decide which getters of
/// [`UrlInfo`](crate::UrlInfo) return meaningful values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UrlType {
    /// `scheme://host/path?query#fragment`
    Url,
    /// `local@domain`, with or without `mailto:`
    Email,
    /// `tel:` numbers and bare `+` prefixed numbers
    Phone,
    /// A lone `#fragment`
    Fragment,
    #[default]
    Invalid,
}

impl UrlType {
    /// Human readable label
    pub fn label(self) -> &'static str {
        match self {
            Self::Url => "URL",
            Self::Email => "Email address",
            Self::Phone => "Phone number",
            Self::Fragment => "Fragment",
            Self::Invalid => "Invalid",
        }
    }

    pub fn is_valid(self) -> bool {
        self != Self::Invalid
    }
}

/// Named fields of a parsed URL, for generic access through
/// [`UrlFields::get`](crate::UrlFields::get).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Scheme,
    User,
    Pass,
    Host,
    Port,
    Path,
    Query,
    Fragment,
}

impl Field {
    pub const ALL: [Self; 8] = [
        Self::Scheme,
        Self::User,
        Self::Pass,
        Self::Host,
        Self::Port,
        Self::Path,
        Self::Query,
        Self::Fragment,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Scheme => "scheme",
            Self::User => "user",
            Self::Pass => "pass",
            Self::Host => "host",
            Self::Port => "port",
            Self::Path => "path",
            Self::Query => "query",
            Self::Fragment => "fragment",
        }
    }
}

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.name().eq_ignore_ascii_case(s))
            .ok_or(UnknownField)
    }
}

/// Returned when a field name does not match any [`Field`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Unknown URL field name")]
pub struct UnknownField;

/// Value of a single [`Field`]. Absent text fields are `""`, an absent port is `-1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Owned(String),
    Port(i64),
}

impl FieldValue<'_> {
    pub fn as_port(&self) -> Option<i64> {
        match self {
            Self::Port(port) => Some(*port),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Owned(text) => f.write_str(text),
            Self::Port(port) => write!(f, "{port}"),
        }
    }
}
