//! Page fetching.
//!
//! - `HttpFetcher`: live documentation over HTTP
//! - `DirFetcher`: offline mirror of the documentation on disk

use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{Context, Result, bail};
use tracing::info;
use url::Url;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Source of raw page bytes.
///
/// Implementations are shared across the worker pool.
pub trait Fetch: Send + Sync {
    fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        info!("Fetching {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .with_context(|| format!("Failed to fetch {}", url))?
            .error_for_status()
            .with_context(|| format!("Failed to fetch {}", url))?;
        let bytes = response
            .bytes()
            .with_context(|| format!("Failed to read response body of {}", url))?;
        Ok(bytes.to_vec())
    }
}

/// Serves pages from a directory laid out like the site's URL paths.
///
/// `https://host/api/v3/invoices` maps to `<root>/api/v3/invoices.html`,
/// falling back to `<root>/api/v3/invoices/index.html`.
pub struct DirFetcher {
    root: PathBuf,
}

impl DirFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Candidate files for a URL, in lookup order. Query and fragment are ignored.
    pub fn candidates(&self, url: &Url) -> Vec<PathBuf> {
        let path = url.path().trim_matches('/');
        if path.is_empty() {
            return vec![self.root.join("index.html")];
        }
        vec![
            self.root.join(format!("{path}.html")),
            self.root.join(path).join("index.html"),
        ]
    }
}

impl Fetch for DirFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        info!("Reading {}", url);
        let parsed = Url::parse(url).with_context(|| format!("Invalid page URL \"{}\"", url))?;
        let candidates = self.candidates(&parsed);
        let Some(file) = candidates.iter().find(|path| path.is_file()) else {
            bail!(
                "No mirrored page for {} (looked for {})",
                url,
                display_paths(&candidates)
            );
        };
        fs::read(file).with_context(|| format!("Failed to read {:?}", file))
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Read a page from a local file, bypassing any fetcher.
pub fn read_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("Failed to read {:?}", path))
}
