//! Reads HTML bytes from stdin, answers one `EXTRACT_CONTENT` request and
//! prints the JSON response to stdout.
//!
//! ```text
//! extract_stdin [--url <url>] [--layout <snapshot.json>] [--options <json>]
//! ```
//!
//! Logs go to stderr; set `RUST_LOG` to change the level.

use std::io::{self, Read};
use std::process::ExitCode;
use std::{env, fs};

use content_sieve::encoding::decode_html;
use content_sieve::{handle_message, LayoutSnapshot, Page, ParserOptions, Request, Response};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: extract_stdin [--url <url>] [--layout <snapshot.json>] [--options <json>]";

#[derive(Default)]
struct Args {
    url: Option<String>,
    layout: Option<String>,
    options: Option<String>,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args::default();
    let mut iter = env::args().skip(1);
    while let Some(flag) = iter.next() {
        let slot = match flag.as_str() {
            "--url" => &mut args.url,
            "--layout" => &mut args.layout,
            "--options" => &mut args.options,
            other => return Err(format!("unknown argument: {other}")),
        };
        *slot = Some(iter.next().ok_or_else(|| format!("missing value for {flag}"))?);
    }
    Ok(args)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{err}\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    let mut bytes = Vec::new();
    if let Err(err) = io::stdin().read_to_end(&mut bytes) {
        eprintln!("Failed to read from stdin: {err}");
        return ExitCode::FAILURE;
    }
    let html = decode_html(&bytes);
    let url = args.url.as_deref().unwrap_or("about:blank");

    let page = match &args.layout {
        Some(path) => {
            let snapshot = fs::read_to_string(path)
                .map_err(|e| e.to_string())
                .and_then(|json| LayoutSnapshot::from_json(&json).map_err(|e| e.to_string()));
            match snapshot {
                Ok(snapshot) => Page::with_snapshot(&html, url, snapshot),
                Err(err) => {
                    eprintln!("Failed to load layout {path}: {err}");
                    return ExitCode::FAILURE;
                }
            }
        }
        None => Page::from_html(&html, url),
    };

    let response = match args.options.as_deref().map(serde_json::from_str::<ParserOptions>) {
        Some(Err(err)) => Response::Failure(content_sieve::Error::from(err).to_string()),
        Some(Ok(options)) => handle_message(&Request::ExtractContent { options: Some(options) }, &page),
        None => handle_message(&Request::ExtractContent { options: None }, &page),
    };

    println!("{}", response.to_json());
    ExitCode::SUCCESS
}
