use crate::application::builders::request_builder::RequestBuilder;
use crate::application::services::HttpRequestService;
use crate::domain::value_objects::{HeaderEntry, Method, Url};
use crate::infrastructure::output::{write_request_echo, write_response};
use anyhow::Result;
use clap::Parser;
use std::io::Write;

/// CLI configuration for not-curl
#[derive(Parser, Debug)]
#[command(name = "not-curl", version)]
#[command(about = "Sends one HTTP request and prints what came back", long_about = None)]
pub struct Cli {
    /// Target URL, including its scheme (e.g. https://)
    #[arg(value_parser = Url::parse)]
    pub url: Url,

    /// HTTP method, sent verbatim; any HTTP token (no spaces or separators)
    #[arg(short = 'X', long = "request", default_value = "GET", value_parser = Method::parse)]
    pub method: Method,

    /// Request header as 'Key: Value'; the key must be an HTTP token. Repeat for more headers
    #[arg(short = 'H', long = "header", value_parser = HeaderEntry::parse)]
    pub headers: Vec<HeaderEntry>,

    /// Raw request body, sent as UTF-8
    #[arg(long = "data-raw")]
    pub data_raw: Option<String>,

    /// Log diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub async fn run<W: Write>(&self, request_service: &HttpRequestService, out: &mut W) -> Result<()> {
        let request = RequestBuilder::new(self.method.clone(), self.url.clone())
            .headers(&self.headers)
            .body(self.data_raw.as_deref())
            .build();

        write_request_echo(out, &request)?;
        out.flush()?;

        let response = request_service.send_request(request).await?;
        write_response(out, &response)
    }
}
