use thiserror::Error;

/// Reasons a string could not be recognized as a URL, email address,
/// phone number or fragment.
///
/// Parsing never returns these as `Err`: they are stored on the parsed
/// [`UrlInfo`](crate::UrlInfo) and queried afterwards.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseError {
    /// Nothing left after stripping whitespace
    #[error("The URL is empty")]
    Empty,
    /// Not a URL, email, phone number or fragment
    #[error("Not a recognized format: no known scheme or host")]
    UnrecognizedFormat,
    /// URL structure without a host
    #[error("The URL has no host")]
    MissingHost,
    /// Host contains characters not allowed in host names
    #[error("The host contains invalid characters")]
    InvalidHost,
    /// Port is not numeric
    #[error("The port is not a valid number")]
    InvalidPort,
    /// `mailto:` scheme without a usable address
    #[error("The email address is not valid")]
    InvalidEmail,
    /// Host could not be converted to its ASCII form
    #[error("IDNA processing error")]
    IdnaError,
}

/// Result type for the fallible helpers behind the parser
pub type Result<T> = core::result::Result<T, ParseError>;
