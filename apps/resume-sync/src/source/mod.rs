//! Data source loading: the portfolio's published `data.json`, or a local copy of it.
//!
//! Every HTTP request made by resume-sync goes through `fetch_remote`.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info};

use crate::errors::SyncError;

pub mod validation;

/// Where the portfolio publishes its data.
pub const DEFAULT_DATA_URL: &str = "https://marcuscjh.github.io/data.json";
/// Conventional local override, looked up relative to the working directory.
pub const DEFAULT_LOCAL_DATA: &str = "data2.json";

/// How the orchestrator picks a data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SourceMode {
    /// Local file if it exists, remote URL otherwise.
    #[default]
    Auto,
    Local,
    Remote,
}

/// Anything that can produce the raw résumé JSON tree.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Human-readable label for progress output.
    fn describe(&self) -> String;

    async fn load(&self) -> Result<Value, SyncError>;
}

pub struct LocalFile {
    path: PathBuf,
}

impl LocalFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DataSource for LocalFile {
    fn describe(&self) -> String {
        format!("local file {}", self.path.display())
    }

    async fn load(&self) -> Result<Value, SyncError> {
        load_local(&self.path).await
    }
}

pub struct RemoteUrl {
    client: Client,
    url: String,
}

impl RemoteUrl {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), url)
    }

    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl DataSource for RemoteUrl {
    fn describe(&self) -> String {
        format!("remote {}", self.url)
    }

    async fn load(&self) -> Result<Value, SyncError> {
        fetch_remote(&self.client, &self.url).await
    }
}

/// GETs `url` and parses the body as JSON.
/// Transport failures and non-2xx statuses are `Network`; a malformed body is `Parse`.
pub async fn fetch_remote(client: &Client, url: &str) -> Result<Value, SyncError> {
    info!("Fetching data from {url}...");

    let response = client.get(url).send().await?.error_for_status()?;
    let body = response.text().await?;
    debug!("Fetched {} bytes from {url}", body.len());

    Ok(serde_json::from_str(&body)?)
}

/// Reads and parses a local JSON file.
pub async fn load_local(path: &Path) -> Result<Value, SyncError> {
    info!("Loading local data from {}...", path.display());

    let body = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| SyncError::io(path, e))?;

    Ok(serde_json::from_str(&body)?)
}

/// Resolves `mode` into a concrete source.
/// `Auto` checks for the local file once, at selection time.
pub fn select_source(mode: SourceMode, local_path: &Path, url: &str) -> Box<dyn DataSource> {
    match mode {
        SourceMode::Local => Box::new(LocalFile::new(local_path)),
        SourceMode::Remote => Box::new(RemoteUrl::new(url)),
        SourceMode::Auto if local_path.exists() => {
            info!("Found local {}, using local data...", local_path.display());
            Box::new(LocalFile::new(local_path))
        }
        SourceMode::Auto => {
            info!(
                "No local {} found, fetching from portfolio...",
                local_path.display()
            );
            Box::new(RemoteUrl::new(url))
        }
    }
}
