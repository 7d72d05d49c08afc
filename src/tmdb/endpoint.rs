use std::fmt;

/// Query parameter values TMDB accepts: plain strings or integers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    Str(String),
    Int(i64),
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryValue::Str(s) => f.write_str(s),
            QueryValue::Int(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Str(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Str(value)
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        QueryValue::Int(value)
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        QueryValue::Int(i64::from(value))
    }
}

/// A relative path (identifiers already interpolated) plus the caller's
/// query parameters, in the order they will be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    path: String,
    params: Vec<(String, QueryValue)>,
}

impl Endpoint {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            params: Vec::new(),
        }
    }

    #[must_use]
    pub fn param(mut self, name: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.params.push((name.into(), value.into()));
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn params(&self) -> &[(String, QueryValue)] {
        &self.params
    }

    /// Value of the first parameter called `name`, if any.
    pub fn get(&self, name: &str) -> Option<&QueryValue> {
        self.params
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v)
    }
}

pub const DEFAULT_PAGE: u32 = 1;

/// `{ query, page }` as sent by every search endpoint.
pub(crate) fn search(path: &str, query: &str, page: Option<u32>) -> Endpoint {
    Endpoint::new(path)
        .param("query", query)
        .param("page", page.unwrap_or(DEFAULT_PAGE))
}

/// `{ page }` as sent by every list endpoint.
pub(crate) fn paged(path: &str, page: Option<u32>) -> Endpoint {
    Endpoint::new(path).param("page", page.unwrap_or(DEFAULT_PAGE))
}
