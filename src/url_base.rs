use crate::types::{Field, FieldValue};

/// Read access to the fields of a parsed URL.
///
/// Absent text fields are `""` and an absent port is `-1`; none of the
/// accessors fail.
pub trait UrlFields {
    /// Lowercase scheme without `:`, `""` when absent or unrecognized
    fn scheme(&self) -> &str;

    /// Percent-decoded user name
    fn user(&self) -> &str;

    /// Percent-decoded password
    fn password(&self) -> &str;

    /// Lowercase host (`[...]` for IPv6)
    fn host(&self) -> &str;

    /// Port number, `-1` when absent
    fn port(&self) -> i64;

    /// Raw path, may contain spaces
    fn path(&self) -> &str;

    /// Serialized query string without `?`
    fn query(&self) -> String;

    /// Fragment without `#`
    fn fragment(&self) -> &str;

    /// Generic access by field name
    fn get(&self, field: Field) -> FieldValue<'_> {
        match field {
            Field::Scheme => FieldValue::Text(self.scheme()),
            Field::User => FieldValue::Text(self.user()),
            Field::Pass => FieldValue::Text(self.password()),
            Field::Host => FieldValue::Text(self.host()),
            Field::Port => FieldValue::Port(self.port()),
            Field::Path => FieldValue::Text(self.path()),
            Field::Query => FieldValue::Owned(self.query()),
            Field::Fragment => FieldValue::Text(self.fragment()),
        }
    }

    fn has_scheme(&self) -> bool {
        !self.scheme().is_empty()
    }

    fn has_user(&self) -> bool {
        !self.user().is_empty()
    }

    fn has_password(&self) -> bool {
        !self.password().is_empty()
    }

    fn has_host(&self) -> bool {
        !self.host().is_empty()
    }

    fn has_port(&self) -> bool {
        self.port() != -1
    }

    fn has_path(&self) -> bool {
        !self.path().is_empty()
    }

    fn has_fragment(&self) -> bool {
        !self.fragment().is_empty()
    }
}
