use percent_encoding::{AsciiSet, CONTROLS, NON_ALPHANUMERIC, utf8_percent_encode};

/// Raw path and fragment text: only control characters are escaped
pub const RAW_COMPONENT_SET: &AsciiSet = CONTROLS;

/// Query parameter names and values.
/// Anything that would change how the query splits (`&`, `=`, `#`, `?`)
/// is escaped, as are `%` and `+` so decoding is lossless. Space is `%20`.
pub const QUERY_COMPONENT_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Username and password: everything except unreserved characters
pub const USERINFO_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Write `input` percent-encoded with `encode_set` into `buffer`.
///
/// Non-ASCII characters are only escaped (as UTF-8 bytes) when
/// `encode_non_ascii` is set; otherwise they pass through unchanged.
pub fn percent_encode_into(
    buffer: &mut String,
    input: &str,
    encode_set: &'static AsciiSet,
    encode_non_ascii: bool,
) {
    buffer.reserve(input.len());

    if encode_non_ascii || input.is_ascii() {
        buffer.extend(utf8_percent_encode(input, encode_set));
        return;
    }

    let mut rest = input;
    while !rest.is_empty() {
        let ascii_len = rest.find(|c: char| !c.is_ascii()).unwrap_or(rest.len());
        let (ascii, tail) = rest.split_at(ascii_len);
        buffer.extend(utf8_percent_encode(ascii, encode_set));

        let non_ascii_len = tail.find(|c: char| c.is_ascii()).unwrap_or(tail.len());
        buffer.push_str(&tail[..non_ascii_len]);
        rest = &tail[non_ascii_len..];
    }
}

pub fn percent_encode_with_set(
    input: &str,
    encode_set: &'static AsciiSet,
    encode_non_ascii: bool,
) -> String {
    let mut buffer = String::new();
    percent_encode_into(&mut buffer, input, encode_set, encode_non_ascii);
    buffer
}

/// Percent-encode a username or password. Always escapes non-ASCII.
pub fn percent_encode_userinfo(input: &str) -> String {
    percent_encode_with_set(input, USERINFO_SET, true)
}

/// Decode percent-encoded text. Invalid UTF-8 is replaced, never rejected.
pub fn percent_decode(input: &str) -> String {
    percent_encoding::percent_decode_str(input)
        .decode_utf8_lossy()
        .into_owned()
}

/// Decode a query name or value, where `+` stands for a space
pub fn decode_query_component(input: &str) -> String {
    if input.contains('+') {
        percent_decode(&input.replace('+', " "))
    } else {
        percent_decode(input)
    }
}
