use crate::domain::entities::Request;
use crate::domain::value_objects::{HeaderEntry, Method, RawBody, Url};

/// Assembles a `Request` from already validated arguments
pub struct RequestBuilder {
    method: Method,
    url: Url,
    headers: Vec<HeaderEntry>,
    body: Option<RawBody>,
}

impl RequestBuilder {
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: Vec::new(),
            body: None,
        }
    }

    /// Adds headers in order; a repeated key is added again, never replaced
    pub fn headers(mut self, headers: &[HeaderEntry]) -> Self {
        self.headers.extend_from_slice(headers);
        self
    }

    pub fn body(mut self, raw: Option<&str>) -> Self {
        self.body = raw.map(RawBody::new);
        self
    }

    pub fn build(self) -> Request {
        Request {
            method: self.method,
            url: self.url,
            headers: self.headers,
            body: self.body,
        }
    }
}
