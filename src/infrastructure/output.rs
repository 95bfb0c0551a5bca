use crate::domain::entities::{Request, Response};
use anyhow::Result;
use std::io::Write;

/// Placeholder printed when the body cannot be decoded
pub const NOT_UTF8: &str = "(not utf8)";

/// Echoes what is about to be sent: method, headers, then URL
pub fn write_request_echo<W: Write>(out: &mut W, request: &Request) -> Result<()> {
    let headers: Vec<String> = request.headers.iter().map(ToString::to_string).collect();

    writeln!(out, "request: {}", request.method)?;
    writeln!(out, "Headers: [{}]", headers.join(", "))?;
    writeln!(out, "url: {}", request.url)?;
    Ok(())
}

/// Writes the status line, response headers, `Body:` and the body text
pub fn write_response<W: Write>(out: &mut W, response: &Response) -> Result<()> {
    writeln!(out, "Response: {:?} {}", response.version, response.status)?;
    for (name, value) in &response.headers {
        writeln!(out, "  {}: {}", name, String::from_utf8_lossy(value.as_bytes()))?;
    }

    writeln!(out, "Body:")?;
    writeln!(out, "{}", response.body_text().unwrap_or(NOT_UTF8))?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::builders::request_builder::RequestBuilder;
    use crate::domain::value_objects::{HeaderEntry, Method, Url};
    use hyper::body::Bytes;
    use hyper::header::{HeaderMap, HeaderValue};
    use hyper::{StatusCode, Version};

    fn response(body: Bytes) -> Response {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", HeaderValue::from_static("text/plain"));
        Response {
            status: StatusCode::NOT_FOUND,
            version: Version::HTTP_11,
            headers,
            body,
        }
    }

    #[test]
    fn echoes_request_in_order() {
        let headers = vec![
            HeaderEntry::parse("Content-Type: application/json").unwrap(),
            HeaderEntry::parse("X-Time:10:30:00").unwrap(),
        ];
        let request = RequestBuilder::new(
            Method::parse("POST").unwrap(),
            Url::parse("https://example.com/api").unwrap(),
        )
        .headers(&headers)
        .build();

        let mut out = Vec::new();
        write_request_echo(&mut out, &request).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "request: POST\n\
             Headers: [Content-Type: application/json, X-Time: 10:30:00]\n\
             url: https://example.com/api\n"
        );
    }

    #[test]
    fn echoes_empty_header_list() {
        let request =
            RequestBuilder::new(Method::default(), Url::parse("http://localhost").unwrap()).build();

        let mut out = Vec::new();
        write_request_echo(&mut out, &request).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "request: GET\nHeaders: []\nurl: http://localhost\n"
        );
    }

    #[test]
    fn writes_status_headers_and_body() {
        let mut out = Vec::new();
        write_response(&mut out, &response(Bytes::from_static(b"{\"a\":1}"))).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Response: HTTP/1.1 404 Not Found\n  content-type: text/plain\nBody:\n{\"a\":1}\n"
        );
    }

    #[test]
    fn falls_back_when_body_is_not_utf8() {
        let mut out = Vec::new();
        write_response(&mut out, &response(Bytes::from_static(&[0xc3, 0x28]))).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("Body:\n(not utf8)\n"));
    }
}
