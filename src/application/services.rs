use crate::domain::entities::{Request, Response};
use anyhow::Result;
use async_trait::async_trait;
use log::debug;

#[cfg(test)]
use mockall::automock;

/// Trait for HTTP clients to enable mocking and dependency inversion
#[cfg_attr(test, automock)]
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn send(&self, request: Request) -> Result<Response>;
}

/// Application service for sending a single HTTP request
pub struct HttpRequestService {
    http_client: Box<dyn HttpClient>,
}

impl HttpRequestService {
    pub fn new(http_client: Box<dyn HttpClient>) -> Self {
        Self { http_client }
    }

    /// Sends the request once; failures are returned as-is, never retried
    pub async fn send_request(&self, request: Request) -> Result<Response> {
        debug!(
            "sending {} {} ({} headers, {} body bytes)",
            request.method,
            request.url,
            request.headers.len(),
            request.body.as_ref().map_or(0, |body| body.as_bytes().len())
        );

        let response = self.http_client.send(request).await?;

        debug!(
            "received {:?} {} ({} body bytes)",
            response.version,
            response.status,
            response.body.len()
        );
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::builders::request_builder::RequestBuilder;
    use crate::domain::value_objects::{Method, Url};
    use anyhow::anyhow;
    use hyper::body::Bytes;
    use hyper::header::HeaderMap;
    use hyper::{StatusCode, Version};

    fn request() -> Request {
        RequestBuilder::new(
            Method::parse("DELETE").unwrap(),
            Url::parse("http://localhost/item/1").unwrap(),
        )
        .build()
    }

    #[tokio::test]
    async fn passes_request_through_to_client() {
        let mut client = MockHttpClient::new();
        client
            .expect_send()
            .withf(|req| req.method.as_str() == "DELETE" && req.url.as_str() == "http://localhost/item/1")
            .times(1)
            .returning(|_| {
                Ok(Response {
                    status: StatusCode::NO_CONTENT,
                    version: Version::HTTP_11,
                    headers: HeaderMap::new(),
                    body: Bytes::new(),
                })
            });

        let service = HttpRequestService::new(Box::new(client));
        let response = service.send_request(request()).await.unwrap();
        assert_eq!(response.status, StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn transport_errors_are_not_retried() {
        let mut client = MockHttpClient::new();
        client
            .expect_send()
            .times(1)
            .returning(|_| Err(anyhow!("connection refused")));

        let service = HttpRequestService::new(Box::new(client));
        let err = service.send_request(request()).await.unwrap_err();
        assert_eq!(err.to_string(), "connection refused");
    }
}
