mod application;
mod domain;
mod infrastructure;
mod presentation;

use clap::Parser;
use colored::Colorize;
use log::LevelFilter;
use crate::infrastructure::http_client::HyperHttpClient;
use crate::presentation::cli::Cli;

/// not-curl: one HTTP request per invocation
///
/// Parses a method, a URL, repeatable `key:value` headers and an optional raw
/// body, sends the request once and prints the exchange to stdout. Any HTTP
/// response, including 4xx/5xx, exits 0; usage and transport errors do not.
#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    pretty_env_logger::formatted_builder()
        .filter_level(level)
        .init();

    let request_service = HyperHttpClient::new().create_request_service();

    if let Err(err) = cli.run(&request_service, &mut std::io::stdout()).await {
        eprintln!("{} {:#}", "error:".red().bold(), err);
        std::process::exit(1);
    }
}
