//! Request building: operation descriptors, per-call options and the pure
//! `build` step that turns them into a [`ResolvedRequest`].

use crate::error::{ClientError, Result};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::header::{HeaderName, HeaderValue};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use url::Url;

/// Header name to value. Names keep the casing they were given.
pub type Headers = BTreeMap<String, String>;

/// Query parameter name to value
pub type QueryParams = BTreeMap<String, String>;

/// Characters left literal in a substituted path value.
const PATH_VALUE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// HTTP method of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// Whether requests with this method carry a body
    pub const fn has_body(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A remote endpoint: method plus a path template such as
/// `/api/blueprints/{blueprintId}/parameters/{parameterId}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Operation {
    pub method: HttpMethod,
    pub path: &'static str,
}

impl Operation {
    pub const fn new(method: HttpMethod, path: &'static str) -> Self {
        Operation { method, path }
    }

    /// Whether the operation sends a request body
    pub const fn expects_body(&self) -> bool {
        self.method.has_body()
    }

    /// Names of the `{placeholders}` in the path template, in order.
    /// Malformed templates stop yielding at the first unbalanced brace.
    pub fn placeholders(&self) -> impl Iterator<Item = &'static str> {
        let mut rest = self.path;
        std::iter::from_fn(move || {
            let start = rest.find('{')?;
            let len = rest[start..].find('}')?;
            let name = &rest[start + 1..start + len];
            rest = &rest[start + len + 1..];
            Some(name)
        })
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}

/// Caller-supplied headers and query parameters for one call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    pub headers: Headers,
    pub query: QueryParams,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Add a query parameter
    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(name.into(), value.into());
        self
    }
}

/// A fully resolved request, ready for a [`crate::transport::Transport`].
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRequest {
    pub method: HttpMethod,
    /// Absolute URL including the query string
    pub url: Url,
    pub headers: Headers,
    /// JSON body, not yet encoded; the transport owns encoding
    pub body: Option<Value>,
}

/// Build a request for `operation`.
///
/// Every placeholder must have an entry in `path_params`; extra entries are
/// ignored. Values are percent-encoded before substitution and the resulting
/// path is resolved against `base_url`, so a leading `/` replaces the base
/// URL's own path. An empty query map adds no `?`. Header names and values
/// must be valid HTTP tokens.
pub fn build(
    base_url: &Url,
    operation: &Operation,
    path_params: &[(&str, &str)],
    options: &RequestOptions,
    body: Option<Value>,
) -> Result<ResolvedRequest> {
    if body.is_some() && !operation.expects_body() {
        return Err(ClientError::RequestBuild(format!(
            "{operation} does not take a request body"
        )));
    }

    check_headers(&options.headers)?;

    let path = substitute(operation.path, path_params)?;
    let mut url = base_url.join(&path)?;

    if !options.query.is_empty() {
        url.query_pairs_mut().extend_pairs(&options.query);
    }

    Ok(ResolvedRequest {
        method: operation.method,
        url,
        headers: options.headers.clone(),
        body,
    })
}

fn substitute(template: &'static str, path_params: &[(&str, &str)]) -> Result<String> {
    let mut path = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(&['{', '}'][..]) {
        if rest.as_bytes()[start] == b'}' {
            return Err(malformed(template));
        }
        path.push_str(&rest[..start]);

        let after = &rest[start + 1..];
        let end = after.find('}').ok_or_else(|| malformed(template))?;
        let name = &after[..end];
        if name.is_empty() || name.contains('{') {
            return Err(malformed(template));
        }

        let value = path_params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
            .ok_or_else(|| ClientError::MissingPathParameter {
                name: name.to_string(),
                template,
            })?;
        path.extend(utf8_percent_encode(value, PATH_VALUE_SET));

        rest = &after[end + 1..];
    }
    path.push_str(rest);

    Ok(path)
}

fn check_headers(headers: &Headers) -> Result<()> {
    for (name, value) in headers {
        HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| ClientError::RequestBuild(format!("invalid header name `{name}`")))?;
        HeaderValue::from_str(value).map_err(|_| {
            ClientError::RequestBuild(format!("invalid value for header `{name}`"))
        })?;
    }
    Ok(())
}

fn malformed(template: &str) -> ClientError {
    ClientError::RequestBuild(format!("malformed path template `{template}`"))
}
