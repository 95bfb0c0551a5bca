use crate::domain::value_objects::{HeaderEntry, Method, RawBody, Url};
use hyper::body::Bytes;
use hyper::header::HeaderMap;
use hyper::{StatusCode, Version};

/// Represents the HTTP request to send
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub url: Url,
    pub headers: Vec<HeaderEntry>, // In command-line order, duplicates kept
    pub body: Option<RawBody>,
}

/// Represents a completed HTTP exchange
#[derive(Debug, Clone)]
pub struct Response {
    pub status: StatusCode,
    pub version: Version,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl Response {
    /// The body as text, or `None` when it is not valid UTF-8
    pub fn body_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response_with_body(body: &'static [u8]) -> Response {
        Response {
            status: StatusCode::OK,
            version: Version::HTTP_11,
            headers: HeaderMap::new(),
            body: Bytes::from_static(body),
        }
    }

    #[test]
    fn body_text_decodes_utf8() {
        assert_eq!(response_with_body(b"hello").body_text(), Some("hello"));
    }

    #[test]
    fn body_text_rejects_invalid_utf8() {
        assert_eq!(response_with_body(&[0xff, 0xfe, 0x00]).body_text(), None);
    }
}
