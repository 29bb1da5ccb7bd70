//! Offline asset cache
//!
//! Precaches the app shell on install, serves requests network-first with a
//! cache fallback, and drops stale cache generations on activation. Fetching
//! is abstracted behind [`Fetch`] so the same logic runs against a real build
//! directory ([`DirFetcher`]) or a scripted fetcher in tests.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Current cache generation
pub const CACHE_NAME: &str = "weighing-calc-cache-v9";

/// Files that make up the app shell
pub const DEFAULT_PRECACHE: &[&str] = &[
    "/",
    "/index.html",
    "/manifest.json",
    "/icons/android-launcher-icon-48-48.png",
    "/icons/android-launcher-icon-72-72.png",
    "/icons/android-launcher-icon-96-96.png",
    "/icons/android-launcher-icon-144-144.png",
    "/icons/android-launcher-icon-192-192.png",
    "/icons/android-launcher-icon-512-512.png",
];

/// HTTP-like status of a successful response
pub const STATUS_OK: u16 = 200;

/// Status reported for files that do not exist
pub const STATUS_NOT_FOUND: u16 = 404;

/// A fetched asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Response {
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: STATUS_OK,
            body: body.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }
}

/// Errors from the asset cache
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("Network request for {url} failed: {message}")]
    Network { url: String, message: String },

    #[error("Failed to cache app shell; missing or unreadable: {}", .urls.join(", "))]
    Install { urls: Vec<String> },
}

/// Source of fresh responses (the "network")
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<Response, AssetError>;
}

/// Configured cache name and precache list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheManifest {
    pub name: String,
    pub precache: Vec<String>,
}

impl Default for CacheManifest {
    fn default() -> Self {
        Self {
            name: CACHE_NAME.to_string(),
            precache: DEFAULT_PRECACHE.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// One named cache generation
#[derive(Debug, Clone, Default)]
pub struct Cache {
    entries: HashMap<String, Response>,
}

impl Cache {
    pub fn put(&mut self, url: &str, response: Response) {
        self.entries.insert(url.to_string(), response);
    }

    pub fn get(&self, url: &str) -> Option<&Response> {
        self.entries.get(url)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// All cache generations, keyed by name
#[derive(Debug, Clone, Default)]
pub struct CacheStorage {
    caches: BTreeMap<String, Cache>,
}

impl CacheStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a cache by name, creating it if needed
    pub fn open(&mut self, name: &str) -> &mut Cache {
        self.caches.entry(name.to_string()).or_default()
    }

    pub fn get(&self, name: &str) -> Option<&Cache> {
        self.caches.get(name)
    }

    pub fn keys(&self) -> Vec<String> {
        self.caches.keys().cloned().collect()
    }

    pub fn delete(&mut self, name: &str) -> bool {
        self.caches.remove(name).is_some()
    }
}

/// Install/fetch/activate lifecycle for one cache generation
#[derive(Debug, Clone)]
pub struct AssetCache {
    manifest: CacheManifest,
}

impl AssetCache {
    pub fn new(manifest: CacheManifest) -> Self {
        Self { manifest }
    }

    pub fn manifest(&self) -> &CacheManifest {
        &self.manifest
    }

    /// Precache the app shell
    ///
    /// All-or-nothing: if any URL fails, nothing is stored and every failing
    /// URL is reported.
    pub fn install<F: Fetch>(
        &self,
        storage: &mut CacheStorage,
        fetcher: &F,
    ) -> Result<usize, AssetError> {
        let mut fetched = Vec::with_capacity(self.manifest.precache.len());
        let mut failed = Vec::new();

        for url in &self.manifest.precache {
            match fetcher.fetch(url) {
                Ok(response) if response.is_ok() => fetched.push((url.as_str(), response)),
                Ok(response) => {
                    tracing::debug!(url = %url, status = response.status, "precache rejected");
                    failed.push(url.clone());
                }
                Err(e) => {
                    tracing::debug!(url = %url, error = %e, "precache fetch failed");
                    failed.push(url.clone());
                }
            }
        }

        if !failed.is_empty() {
            return Err(AssetError::Install { urls: failed });
        }

        let count = fetched.len();
        let cache = storage.open(&self.manifest.name);
        for (url, response) in fetched {
            cache.put(url, response);
        }
        tracing::info!(cache = %self.manifest.name, count, "cached app shell");
        Ok(count)
    }

    /// Serve `url` network-first, falling back to the cache
    pub fn fetch<F: Fetch>(
        &self,
        storage: &mut CacheStorage,
        fetcher: &F,
        url: &str,
    ) -> Option<Response> {
        match fetcher.fetch(url) {
            Ok(response) => {
                if response.is_ok() {
                    storage.open(&self.manifest.name).put(url, response.clone());
                }
                Some(response)
            }
            Err(e) => {
                tracing::debug!(url, error = %e, "network failed, serving from cache");
                storage
                    .get(&self.manifest.name)
                    .and_then(|cache| cache.get(url))
                    .cloned()
            }
        }
    }

    /// Delete every cache generation other than the current one
    pub fn activate(&self, storage: &mut CacheStorage) -> Vec<String> {
        let stale: Vec<String> = storage
            .keys()
            .into_iter()
            .filter(|name| *name != self.manifest.name)
            .collect();

        for name in &stale {
            tracing::info!(cache = %name, "deleting old cache");
            storage.delete(name);
        }
        stale
    }
}

/// Serves URLs from files under a directory
#[derive(Debug, Clone)]
pub struct DirFetcher {
    root: PathBuf,
}

impl DirFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Map a URL path onto a file under the root (`/` is `index.html`)
    pub fn resolve(&self, url: &str) -> PathBuf {
        let path = url.split(['?', '#']).next().unwrap_or("");
        let relative = path.trim_start_matches('/');
        if relative.is_empty() || relative.ends_with('/') {
            self.root.join(relative).join("index.html")
        } else {
            self.root.join(relative)
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Fetch for DirFetcher {
    fn fetch(&self, url: &str) -> Result<Response, AssetError> {
        let path = self.resolve(url);
        if !path.is_file() {
            return Ok(Response {
                status: STATUS_NOT_FOUND,
                body: Vec::new(),
            });
        }
        std::fs::read(&path)
            .map(Response::ok)
            .map_err(|e| AssetError::Network {
                url: url.to_string(),
                message: e.to_string(),
            })
    }
}
