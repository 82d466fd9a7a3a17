use std::borrow::Cow;

use crate::character_sets::{is_ascii_tab_or_newline, is_trimmable};

/// Fast check if string contains tabs or newlines
pub fn has_tabs_or_newline(input: &str) -> bool {
    memchr::memchr3(b'\t', b'\n', b'\r', input.as_bytes()).is_some()
}

/// Prune fragment (#hash) from URL string
/// Returns (`url_without_fragment`, `fragment_without_hash`)
pub fn prune_fragment(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'#', input.as_bytes()).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos + 1..]))
    })
}

/// Split off the query at the first `?`. Later `?` belong to the query.
pub fn prune_query(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'?', input.as_bytes()).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos + 1..]))
    })
}

fn hex_pair_is(bytes: &[u8], i: usize, pair: &[u8; 2]) -> bool {
    bytes.get(i + 1).is_some_and(|b| b.eq_ignore_ascii_case(&pair[0]))
        && bytes.get(i + 2).is_some_and(|b| b.eq_ignore_ascii_case(&pair[1]))
}

/// `%0D`, `%0A` or `%09` at byte offset `i`
fn is_encoded_tab_or_newline(bytes: &[u8], i: usize) -> bool {
    bytes[i] == b'%'
        && (hex_pair_is(bytes, i, b"0d") || hex_pair_is(bytes, i, b"0a") || hex_pair_is(bytes, i, b"09"))
}

/// `%20`, `%0D`, `%0A` or `%09` at byte offset `i`
fn is_encoded_whitespace(bytes: &[u8], i: usize) -> bool {
    (bytes[i] == b'%' && hex_pair_is(bytes, i, b"20")) || is_encoded_tab_or_newline(bytes, i)
}

/// Trim literal and percent-encoded whitespace from both ends
pub fn trim_whitespace(input: &str) -> &str {
    let mut s = input;
    loop {
        let before = s.len();
        s = s.trim_matches(is_trimmable);

        let bytes = s.as_bytes();
        if bytes.len() >= 3 && is_encoded_whitespace(bytes, 0) {
            s = &s[3..];
        }
        let bytes = s.as_bytes();
        if bytes.len() >= 3 && is_encoded_whitespace(bytes, bytes.len() - 3) {
            s = &s[..s.len() - 3];
        }

        if s.len() == before {
            return s;
        }
    }
}

/// Remove raw and percent-encoded tabs and newlines anywhere in the input.
///
/// This includes path, query and fragment: `?text=a%0Ab` reads as
/// `text=ab`. Line breaks copied out of documents land in any part of a
/// URL, and none of them survive into the normalized form.
pub fn remove_tabs_and_newlines(input: &str) -> Cow<'_, str> {
    let bytes = input.as_bytes();
    let has_encoded = memchr::memchr_iter(b'%', bytes).any(|i| is_encoded_tab_or_newline(bytes, i));
    if !has_encoded && !has_tabs_or_newline(input) {
        return Cow::Borrowed(input);
    }

    let mut result = String::with_capacity(input.len());
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        let skip = if is_ascii_tab_or_newline(bytes[i] as char) {
            1
        } else if is_encoded_tab_or_newline(bytes, i) {
            3
        } else {
            0
        };

        if skip == 0 {
            i += 1;
        } else {
            result.push_str(&input[start..i]);
            i += skip;
            start = i;
        }
    }
    result.push_str(&input[start..]);

    Cow::Owned(result)
}

/// Remove `<!-- ... -->` comments. An unterminated comment swallows the rest.
pub fn strip_html_comments(input: &str) -> Cow<'_, str> {
    if !input.contains("<!--") {
        return Cow::Borrowed(input);
    }

    let mut result = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(open) = rest.find("<!--") {
        result.push_str(&rest[..open]);
        match rest[open + 4..].find("-->") {
            Some(close) => rest = &rest[open + 4 + close + 3..],
            None => rest = "",
        }
    }
    result.push_str(rest);

    Cow::Owned(result)
}

/// Byte offset where the scheme and authority part of a candidate ends.
///
/// That is the first `/` after the authority, or the first `?` / `#`.
/// Spaces around `:` and `//` are tolerated while looking for the authority.
fn head_end(input: &str) -> usize {
    let bytes = input.as_bytes();
    let limit = memchr::memchr2(b'?', b'#', bytes).unwrap_or(bytes.len());
    let head = &bytes[..limit];

    let skip_separators = |mut pos: usize| {
        while pos < head.len() && matches!(head[pos], b'/' | b' ') {
            pos += 1;
        }
        pos
    };

    let authority_start = memchr::memchr_iter(b':', head)
        .find(|&colon| {
            head[colon + 1..]
                .iter()
                .find(|&&b| b != b' ')
                .is_some_and(|&b| b == b'/')
        })
        .map(|colon| skip_separators(colon + 1))
        .or_else(|| {
            let leading = head.iter().take_while(|&&b| b == b' ').count();
            head[leading..]
                .starts_with(b"//")
                .then(|| skip_separators(leading))
        })
        .unwrap_or(0);

    memchr::memchr(b'/', &head[authority_start..]).map_or(limit, |pos| authority_start + pos)
}

/// Remove spaces from the scheme and authority part
fn remove_head_spaces(input: &str) -> Cow<'_, str> {
    let end = head_end(input);
    let head = &input[..end];
    if !head.contains(' ') {
        return Cow::Borrowed(input);
    }

    let mut result: String = head.chars().filter(|&c| c != ' ').collect();
    result.push_str(&input[end..]);

    Cow::Owned(result)
}

/// Turn raw, possibly messy input into a candidate for structural parsing.
///
/// Decodes HTML ampersands, drops HTML comments, trims literal and
/// percent-encoded whitespace, removes tabs and newlines, and removes
/// spaces from the scheme and host part. Spaces in path, query and
/// fragment are kept.
pub fn sanitize(input: &str) -> String {
    let unescaped = if input.contains("&amp;") {
        Cow::Owned(input.replace("&amp;", "&"))
    } else {
        Cow::Borrowed(input)
    };
    let uncommented = strip_html_comments(&unescaped);
    let collapsed = remove_tabs_and_newlines(trim_whitespace(&uncommented));
    let trimmed = trim_whitespace(&collapsed);
    let result = remove_head_spaces(trimmed).into_owned();

    if result != input {
        tracing::trace!(input, sanitized = %result, "sanitized URL input");
    }

    result
}
