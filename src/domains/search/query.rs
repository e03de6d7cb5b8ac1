//! Ordered query parameters for provider requests.

/// Query-string parameters for a single provider request.
///
/// Pairs keep insertion order. Scalar values that are empty are never
/// stored, so an optional field the caller did not supply leaves no trace in
/// the query string. A key may appear more than once (see
/// [`QueryParams::push_all`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    /// Create an empty parameter list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `key=value` unless `value` is empty.
    pub fn push(&mut self, key: &'static str, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        if !value.is_empty() {
            self.pairs.push((key, value));
        }
        self
    }

    /// Append `key=value` when the field was supplied.
    ///
    /// Presence is decided by the `Option`, not by the rendered value, so a
    /// supplied `0` is still sent.
    pub fn push_opt<T: ToString>(&mut self, key: &'static str, value: Option<T>) -> &mut Self {
        if let Some(value) = value {
            self.push(key, value.to_string());
        }
        self
    }

    /// Append one `key=value` pair per element, in order.
    ///
    /// Every element is kept, including empty strings: list-valued
    /// identifiers are forwarded exactly as supplied.
    pub fn push_all<I, V>(&mut self, key: &'static str, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.pairs
            .extend(values.into_iter().map(|value| (key, value.into())));
        self
    }

    /// First value stored for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether `key` is present at all.
    pub fn contains(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| *k == key)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Render as an `application/x-www-form-urlencoded` query string.
    ///
    /// Each value is encoded independently; repeated keys stay repeated.
    pub fn to_query_string(&self) -> Result<String, serde_urlencoded::ser::Error> {
        serde_urlencoded::to_string(&self.pairs)
    }
}
