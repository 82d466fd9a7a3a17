use crate::character_sets::is_trimmable;
use crate::unicode::percent_encode::{
    QUERY_COMPONENT_SET, decode_query_component, percent_encode_into,
};

/// Query string parameters.
///
/// Names are kept verbatim: dots and spaces are not rewritten, and a name
/// that is a prefix of another (`foo` and `foo.bar`) stays distinct. Each
/// name appears once; a repeated name keeps its first position and takes
/// the last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    params: Vec<(String, String)>,
}

fn decode_value(value: &str) -> String {
    let decoded = decode_query_component(value);
    if decoded.starts_with(is_trimmable) || decoded.ends_with(is_trimmable) {
        decoded.trim_matches(is_trimmable).to_string()
    } else {
        decoded
    }
}

impl QueryParams {
    pub fn new() -> Self {
        Self { params: Vec::new() }
    }

    /// Parse from a query string (with or without leading `?`).
    ///
    /// Pairs split on `&`, names from values on the first `=`. Both are
    /// percent-decoded after splitting, so an encoded `%26foo%3Dbar` stays
    /// inside its value. Decoded values are trimmed of surrounding
    /// whitespace, so `b=%20` and `q=a+` can never end a normalized URL
    /// with whitespace the sanitizer would strip on the next parse.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);

        let mut params = Self::new();
        query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| match pair.split_once('=') {
                Some((name, value)) => (decode_query_component(name), decode_value(value)),
                None => (decode_query_component(pair), String::new()),
            })
            .for_each(|(name, value)| params.set(&name, &value));

        params
    }

    /// Get the value of a parameter
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.params.iter().any(|(n, _)| n == name)
    }

    /// Set a parameter, replacing the value in place if it exists
    pub fn set(&mut self, name: &str, value: &str) {
        match self.params.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => value.clone_into(v),
            None => self.params.push((name.to_string(), value.to_string())),
        }
    }

    /// Remove a parameter. Absent names are ignored.
    pub fn remove(&mut self, name: &str) {
        self.params.retain(|(n, _)| n != name);
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Iterate in first-occurrence order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|(n, _)| n.as_str())
    }

    /// Parameters sorted ascending by name
    pub fn sorted(&self) -> Vec<(&str, &str)> {
        let mut sorted: Vec<(&str, &str)> = self.iter().collect();
        sorted.sort_unstable_by(|a, b| a.0.cmp(b.0));
        sorted
    }

    /// Serialize sorted by name, without leading `?`.
    ///
    /// Parameters for which `keep` returns false are skipped. Spaces are
    /// written as `%20`; non-ASCII is escaped only with `encode_non_ascii`.
    pub fn serialize_filtered(&self, keep: impl Fn(&str) -> bool, encode_non_ascii: bool) -> String {
        let mut result = String::new();
        for (name, value) in self.sorted().into_iter().filter(|(name, _)| keep(name)) {
            if !result.is_empty() {
                result.push('&');
            }
            percent_encode_into(&mut result, name, QUERY_COMPONENT_SET, encode_non_ascii);
            result.push('=');
            percent_encode_into(&mut result, value, QUERY_COMPONENT_SET, encode_non_ascii);
        }
        result
    }

    /// Serialize all parameters sorted by name, without leading `?`
    pub fn serialize(&self) -> String {
        self.serialize_filtered(|_| true, false)
    }
}

impl core::fmt::Display for QueryParams {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.serialize())
    }
}

impl From<&str> for QueryParams {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}
