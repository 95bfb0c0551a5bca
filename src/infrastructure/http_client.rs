use crate::application::services::{HttpClient, HttpRequestService};
use crate::domain::entities::{Request, Response};
use crate::domain::value_objects::{HeaderEntry, RawBody};

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use http_body_util::{BodyExt, Full};
use hyper::Request as HyperRequest;
use hyper::body::Bytes;
use hyper::header::HeaderMap;
use hyper_tls::HttpsConnector;
use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::rt::TokioExecutor;
use std::time::Duration;
use tower::ServiceExt;
use tower_http::follow_redirect::FollowRedirect;

/// Deadline for one whole exchange, redirects and body included
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

type HttpsClient = Client<HttpsConnector<HttpConnector>, Full<Bytes>>;

/// Infrastructure implementation of HttpClient using Hyper
/// Speaks both http and https; TLS goes through the platform's native stack.
/// Redirects are followed with tower-http's standard policy.
pub struct HyperHttpClient {
    client: FollowRedirect<HttpsClient>,
    timeout: Duration,
}

impl HyperHttpClient {
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        let connector = HttpsConnector::new();
        let client = Client::builder(TokioExecutor::new())
            .build::<HttpsConnector<HttpConnector>, Full<Bytes>>(connector);
        Self {
            client: FollowRedirect::new(client),
            timeout,
        }
    }

    /// Creates a configured HTTP request service using this client
    pub fn create_request_service(self) -> HttpRequestService {
        HttpRequestService::new(Box::new(self))
    }
}

impl Default for HyperHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for HyperHttpClient {
    async fn send(&self, request: Request) -> Result<Response> {
        let hyper_request = RequestAdapter::to_hyper_request(request);
        tokio::time::timeout(self.timeout, self.exchange(hyper_request))
            .await
            .map_err(|_| anyhow!("HTTP request timed out after {:?}", self.timeout))?
    }
}

impl HyperHttpClient {
    async fn exchange(&self, request: HyperRequest<Full<Bytes>>) -> Result<Response> {
        let hyper_response = self.execute_http_request(request).await?;
        ResponseAdapter::to_domain_response(hyper_response).await
    }

    async fn execute_http_request(
        &self,
        request: HyperRequest<Full<Bytes>>,
    ) -> Result<hyper::Response<hyper::body::Incoming>> {
        self.client
            .clone()
            .oneshot(request)
            .await
            .context("HTTP request execution failed")
    }
}

/// Adapter for converting domain requests to Hyper requests
struct RequestAdapter;

impl RequestAdapter {
    fn to_hyper_request(domain_request: Request) -> HyperRequest<Full<Bytes>> {
        let body = BodyAdapter::to_hyper_body(domain_request.body.as_ref());
        let mut hyper_request = HyperRequest::new(body);

        *hyper_request.method_mut() = domain_request.method.0;
        *hyper_request.uri_mut() = domain_request.url.uri().clone();
        HeaderAdapter::append_headers(hyper_request.headers_mut(), &domain_request.headers);

        hyper_request
    }
}

/// Adapter for converting domain responses from Hyper responses
struct ResponseAdapter;

impl ResponseAdapter {
    async fn to_domain_response(
        hyper_response: hyper::Response<hyper::body::Incoming>,
    ) -> Result<Response> {
        let (parts, body) = hyper_response.into_parts();
        let body = body
            .collect()
            .await
            .context("Failed to read response body")?
            .to_bytes();

        Ok(Response {
            status: parts.status,
            version: parts.version,
            headers: parts.headers,
            body,
        })
    }
}

/// Adapter for converting domain request bodies to Hyper bodies
struct BodyAdapter;

impl BodyAdapter {
    fn to_hyper_body(domain_body: Option<&RawBody>) -> Full<Bytes> {
        match domain_body {
            Some(raw) => Full::new(Bytes::from(raw.0.clone())),
            None => Full::new(Bytes::new()),
        }
    }
}

/// Adapter for handling HTTP headers
struct HeaderAdapter;

impl HeaderAdapter {
    /// `append`, not `insert`: a key given twice is sent twice
    fn append_headers(headers: &mut HeaderMap, entries: &[HeaderEntry]) {
        for entry in entries {
            headers.append(entry.name().clone(), entry.header_value().clone());
        }
    }
}
