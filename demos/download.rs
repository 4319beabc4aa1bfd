//! Download a few files side by side and print the ones that failed.
//!
//! ```text
//! cargo run --example download -- https://example.com/a.zip https://example.com/b.zip
//! ```
//!
//! Without arguments a built-in list is used. Set `RUST_LOG=fetchbar=debug`
//! to see the engine's logs.

use color_eyre::Result;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use fetchbar::{DownloaderBuilder, Job};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const DEFAULT_URLS: &[&str] = &[
    "https://github.com/seanmonstar/reqwest/archive/refs/tags/v0.11.9.zip",
    "https://github.com/tokio-rs/tokio/archive/refs/tags/tokio-1.45.1.tar.gz",
    "https://httpbin.org/stream-bytes/204800",
    "https://httpbin.org/status/404",
];

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut urls: Vec<String> = std::env::args().skip(1).collect();
    if urls.is_empty() {
        urls = DEFAULT_URLS.iter().map(|u| u.to_string()).collect();
    }

    // Stagger the starts so the bars appear one after the other.
    let jobs = urls
        .iter()
        .enumerate()
        .map(|(i, url)| {
            Job::try_from(url.as_str()).map(|job| job.with_delay(Duration::from_millis(500) * i as u32))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let downloader = DownloaderBuilder::new()
        .directory(PathBuf::from("output"))
        .concurrent_downloads(4)
        .refresh_rate(Duration::from_millis(200))
        .build();
    let report = downloader.download(&jobs).await?;

    println!(
        "Downloaded {} of {} files.",
        report.succeeded().count(),
        report.len()
    );

    if !report.is_success() {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_header(vec!["File", "Bytes", "Error"]);
        for failure in report.failures() {
            let error = failure
                .error()
                .map(|e| e.to_string())
                .unwrap_or_default();
            table.add_row(vec![
                Cell::new(failure.label()),
                Cell::new(failure.size()),
                Cell::new(error),
            ]);
        }
        println!("{table}");
    }

    Ok(())
}
