use std::collections::{HashMap, VecDeque};
use std::fs;
use std::future::Future;
use std::io;
use std::path::Path;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use std::time::Duration;

use fetchbar::progress::{ProgressBarOpts, ProgressSink, ProgressUpdate, StyleOptions};
use fetchbar::{DownloaderBuilder, Error, Fetched, Result, Source};
use futures::future::BoxFuture;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{StatusCode, Url};
use tempfile::TempDir;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWriteExt, ReadBuf};
use tokio::net::TcpListener;
use tokio::time::{Instant, Sleep};

pub const TEST_USER_AGENT: &str = "fetchbar-test-agent";
pub const TEST_REFRESH_RATE: Duration = Duration::from_millis(50);

/// Creates a temporary directory for testing purposes
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Creates test file content of specified size
pub fn create_test_content(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i % 256) as u8).collect()
}

/// Asserts that a file has the expected size
pub fn assert_file_size(path: &Path, expected_size: u64) {
    let metadata = fs::metadata(path).expect("Failed to get file metadata");
    assert_eq!(
        metadata.len(),
        expected_size,
        "File size mismatch at path: {:?}",
        path
    );
}

pub fn url(path: &str) -> Url {
    Url::parse(&format!("https://example.com/{}", path)).expect("Invalid test url")
}

// === Scripted source ===

/// One step of a scripted response body.
#[derive(Debug, Clone)]
pub enum Step {
    Chunk(Vec<u8>),
    Pause(Duration),
    Fail(io::ErrorKind),
}

impl Step {
    pub fn chunk(size: usize) -> Self {
        Step::Chunk(create_test_content(size))
    }
}

/// Body made of `sizes` chunks.
pub fn chunks(sizes: &[usize]) -> Vec<Step> {
    sizes.iter().map(|&n| Step::chunk(n)).collect()
}

#[derive(Debug, Clone)]
pub struct Script {
    pub declared_length: Option<u64>,
    pub status: Option<StatusCode>,
    pub steps: Vec<Step>,
}

impl Script {
    pub fn new(declared_length: Option<u64>, steps: Vec<Step>) -> Self {
        Self {
            declared_length,
            status: None,
            steps,
        }
    }

    pub fn status(status: StatusCode) -> Self {
        Self {
            declared_length: None,
            status: Some(status),
            steps: Vec::new(),
        }
    }
}

/// Hands out scripted bodies per URL and remembers when each was fetched.
#[derive(Default)]
pub struct ScriptedSource {
    scripts: HashMap<String, Script>,
    fetched_at: Mutex<HashMap<String, Instant>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, url: &Url, script: Script) -> Self {
        self.scripts.insert(url.as_str().to_string(), script);
        self
    }

    pub fn fetched_at(&self, url: &Url) -> Option<Instant> {
        self.fetched_at.lock().unwrap().get(url.as_str()).copied()
    }
}

impl Source for ScriptedSource {
    fn fetch<'a>(&'a self, url: &'a Url) -> BoxFuture<'a, Result<Fetched>> {
        Box::pin(async move {
            self.fetched_at
                .lock()
                .unwrap()
                .insert(url.as_str().to_string(), Instant::now());

            let script = self.scripts.get(url.as_str()).cloned().ok_or_else(|| {
                Error::BadStatus {
                    url: url.clone(),
                    status: StatusCode::NOT_FOUND,
                }
            })?;
            if let Some(status) = script.status {
                return Err(Error::BadStatus {
                    url: url.clone(),
                    status,
                });
            }
            Ok(Fetched::new(
                Box::pin(ScriptedStream::new(script.steps)),
                script.declared_length,
            ))
        })
    }
}

/// Async reader replaying a list of [`Step`]s.
pub struct ScriptedStream {
    steps: VecDeque<Step>,
    pause: Option<Pin<Box<Sleep>>>,
}

impl ScriptedStream {
    pub fn new(steps: Vec<Step>) -> Self {
        Self {
            steps: steps.into(),
            pause: None,
        }
    }
}

impl AsyncRead for ScriptedStream {
    fn poll_read(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        loop {
            if let Some(pause) = self.pause.as_mut() {
                if pause.as_mut().poll(cx).is_pending() {
                    return Poll::Pending;
                }
                self.pause = None;
            }

            match self.steps.pop_front() {
                None => return Poll::Ready(Ok(())),
                Some(Step::Pause(delay)) => {
                    self.pause = Some(Box::pin(tokio::time::sleep(delay)));
                }
                Some(Step::Fail(kind)) => {
                    return Poll::Ready(Err(io::Error::new(kind, "scripted failure")));
                }
                Some(Step::Chunk(mut data)) => {
                    let n = data.len().min(buf.remaining());
                    buf.put_slice(&data[..n]);
                    if n < data.len() {
                        let rest = data.split_off(n);
                        self.steps.push_front(Step::Chunk(rest));
                    }
                    return Poll::Ready(Ok(()));
                }
            }
        }
    }
}

// === Recording sink ===

/// Keeps every published update.
#[derive(Default)]
pub struct RecordingSink {
    updates: Mutex<Vec<ProgressUpdate>>,
    finished: Mutex<bool>,
}

impl RecordingSink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn updates(&self) -> Vec<ProgressUpdate> {
        self.updates.lock().unwrap().clone()
    }

    pub fn updates_for(&self, id: usize) -> Vec<ProgressUpdate> {
        self.updates()
            .into_iter()
            .filter(|u| u.id == id)
            .collect()
    }

    pub fn is_finished(&self) -> bool {
        *self.finished.lock().unwrap()
    }
}

impl ProgressSink for RecordingSink {
    fn publish(&self, update: &ProgressUpdate) {
        self.updates.lock().unwrap().push(update.clone());
    }

    fn finish(&self) {
        *self.finished.lock().unwrap() = true;
    }
}

/// Checks the invariants every transfer's update stream must hold.
///
/// Returns the terminal update.
pub fn assert_well_formed(updates: &[ProgressUpdate]) -> ProgressUpdate {
    let (last, rest) = updates.split_last().expect("no update was published");
    assert!(last.is_terminal(), "last update is not terminal: {:?}", last);
    assert!(
        rest.iter().all(|u| !u.is_terminal()),
        "more than one terminal update: {:?}",
        updates
    );
    assert!(
        updates.windows(2).all(|w| w[0].bytes <= w[1].bytes),
        "byte count went backwards: {:?}",
        updates
    );
    last.clone()
}

// === Builders ===

/// Creates test headers with common user agent
pub fn create_test_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(TEST_USER_AGENT));
    headers
}

/// Creates test headers with custom user agent
pub fn create_test_headers_with_agent(agent: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_str(agent).expect("Invalid header value"));
    headers
}

/// Downloader wired to a scripted source and a recording sink.
pub fn scripted_downloader(
    dir: &Path,
    source: Arc<ScriptedSource>,
    sink: Arc<RecordingSink>,
) -> DownloaderBuilder {
    DownloaderBuilder::hidden()
        .directory(dir.to_path_buf())
        .refresh_rate(TEST_REFRESH_RATE)
        .source(source)
        .sink(sink)
}

/// Creates hidden style options for testing
pub fn create_disabled_style_options() -> StyleOptions {
    StyleOptions::new(
        ProgressBarOpts::hidden(),
        ProgressBarOpts::hidden(),
        ProgressBarOpts::hidden(),
    )
}

/// Creates custom progress bar options with template and chars
pub fn create_custom_progress_opts(template: &str, chars: &str) -> ProgressBarOpts {
    ProgressBarOpts::new(
        Some(template.to_string()),
        Some(chars.to_string()),
        true,
        false,
    )
}

// === Local HTTP server ===

/// Serves `response` verbatim to the first connection and returns its URL.
pub async fn serve_once(response: Vec<u8>) -> Url {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test server");
    let addr = listener.local_addr().expect("No local address");

    tokio::spawn(async move {
        if let Ok((mut socket, _)) = listener.accept().await {
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                match socket.read(&mut buf).await {
                    Ok(0) | Err(_) => return,
                    Ok(n) => request.extend_from_slice(&buf[..n]),
                }
            }
            let _ = socket.write_all(&response).await;
            let _ = socket.shutdown().await;
        }
    });

    Url::parse(&format!("http://{}/file.bin", addr)).expect("Invalid server url")
}

/// A raw HTTP/1.1 response with a `Content-Length` header.
pub fn http_response(status_line: &str, body: &[u8]) -> Vec<u8> {
    let mut response = format!(
        "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status_line,
        body.len()
    )
    .into_bytes();
    response.extend_from_slice(body);
    response
}

/// A raw HTTP/1.1 response without a declared length, closed after the body.
pub fn http_response_without_length(body: &[u8]) -> Vec<u8> {
    let mut response = b"HTTP/1.1 200 OK\r\nConnection: close\r\n\r\n".to_vec();
    response.extend_from_slice(body);
    response
}
