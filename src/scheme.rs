/// Schemes recognized out of the box: web, messaging, version control and
/// DSN-style connection strings.
pub const DEFAULT_SCHEMES: &[&str] = &[
    "http",
    "https",
    "ftp",
    "ftps",
    "sftp",
    "ws",
    "wss",
    "mailto",
    "tel",
    "sms",
    "xmpp",
    "irc",
    "ircs",
    "git",
    "svn",
    "ssh",
    "mariadb",
    "mysql",
    "postgres",
    "postgresql",
    "mongodb",
    "redis",
    "amqp",
    "ldap",
    "ldaps",
    "smtp",
    "imap",
    "pop3",
    "telnet",
    "rtsp",
    "nntp",
    "news",
];

/// Scheme prepended to bare recognized hosts
pub const DEFAULT_SCHEME: &str = "https";

/// Check that a token is shaped like a scheme: a letter followed by
/// letters, digits, `+`, `-` or `.`.
pub fn is_scheme_token(token: &str) -> bool {
    let bytes = token.as_bytes();
    match bytes.split_first() {
        Some((first, rest)) => {
            first.is_ascii_alphabetic()
                && rest
                    .iter()
                    .all(|&b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.'))
        }
        None => false,
    }
}

/// Split `scheme:rest` at the first colon.
/// Returns `None` when the part before the colon is not a scheme token.
pub fn split_scheme(input: &str) -> Option<(&str, &str)> {
    let colon = memchr::memchr(b':', input.as_bytes())?;
    let token = &input[..colon];
    is_scheme_token(token).then(|| (token, &input[colon + 1..]))
}

/// Check if a scheme transports over TLS
pub fn is_secure_scheme(scheme: &str) -> bool {
    scheme == "https"
}
