//! Shared helpers for integration tests
//!
//! `FakeGitHub` is a minimal HTTP/1.1 server on a loopback port that answers
//! `GET` requests from a fixed route table, standing in for the GitHub
//! releases API.

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

use velox_updater::app::{ClientConfig, Component, GitHubClient, Registry};

type Routes = Arc<HashMap<String, (u16, String)>>;

/// Route status that accepts the request and never answers
pub const HANG: u16 = 0;

/// Fake releases API
pub struct FakeGitHub {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<String>>>,
    handle: JoinHandle<()>,
}

impl FakeGitHub {
    /// Starts a server answering `/repos/{owner}/{repo}/releases/latest`
    ///
    /// Each route is `(owner/repo, status, body)`; anything else gets a 404.
    /// A status of [`HANG`] keeps the connection open without a response.
    pub async fn start(routes: &[(&str, u16, &str)]) -> Self {
        let routes: Routes = Arc::new(
            routes
                .iter()
                .map(|(repository, status, body)| {
                    (
                        format!("/repos/{}/releases/latest", repository),
                        (*status, body.to_string()),
                    )
                })
                .collect(),
        );

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));

        let log = Arc::clone(&requests);
        let handle = tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let routes = Arc::clone(&routes);
                let log = Arc::clone(&log);
                tokio::spawn(async move {
                    let _ = serve(stream, routes, log).await;
                });
            }
        });

        Self {
            addr,
            requests,
            handle,
        }
    }

    /// Answers every release request with a JSON tag
    pub async fn with_tags(tags: &[(&str, &str)]) -> Self {
        let bodies: Vec<(String, String)> = tags
            .iter()
            .map(|(repository, tag)| {
                (
                    repository.to_string(),
                    serde_json::json!({ "tag_name": tag, "name": tag }).to_string(),
                )
            })
            .collect();
        let routes: Vec<(&str, u16, &str)> = bodies
            .iter()
            .map(|(repository, body)| (repository.as_str(), 200, body.as_str()))
            .collect();
        Self::start(&routes).await
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Client pointed at this server
    pub fn client(&self) -> GitHubClient {
        self.client_with_timeout(Duration::from_secs(5))
    }

    pub fn client_with_timeout(&self, request_timeout: Duration) -> GitHubClient {
        let config = ClientConfig {
            api_base_url: self.base_url(),
            request_timeout,
            ..Default::default()
        };
        GitHubClient::with_config(&config).unwrap()
    }

    /// Raw request heads received so far, in order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// Request paths received so far, in order
    pub fn paths(&self) -> Vec<String> {
        self.requests()
            .iter()
            .filter_map(|head| head.split_whitespace().nth(1).map(str::to_string))
            .collect()
    }
}

impl Drop for FakeGitHub {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn serve(
    mut stream: TcpStream,
    routes: Routes,
    log: Arc<Mutex<Vec<String>>>,
) -> std::io::Result<()> {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buffer.windows(4).any(|w| w == b"\r\n\r\n") {
        let read = stream.read(&mut chunk).await?;
        if read == 0 {
            return Ok(());
        }
        buffer.extend_from_slice(&chunk[..read]);
    }

    let head = String::from_utf8_lossy(&buffer).to_string();
    let path = head.split_whitespace().nth(1).unwrap_or("/").to_string();
    log.lock().unwrap().push(head);

    let (status, body) = routes
        .get(&path)
        .cloned()
        .unwrap_or_else(|| (404, r#"{"message":"Not Found"}"#.to_string()));

    if status == HANG {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        return Ok(());
    }

    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason(status),
        body.len(),
        body
    );
    stream.write_all(response.as_bytes()).await?;
    stream.shutdown().await
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        403 => "Forbidden",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}

/// Registry of `(id, owner, repo)` triples
pub fn registry(components: &[(&str, &str, &str)]) -> Registry {
    Registry::new(
        components
            .iter()
            .map(|(id, owner, repo)| Component::new(*id, *owner, *repo))
            .collect(),
    )
    .unwrap()
}

/// Writes `content` to `velox.toml` in a fresh temporary directory
pub async fn manifest_file(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("velox.toml");
    tokio::fs::write(&path, content).await.unwrap();
    (temp_dir, path)
}
