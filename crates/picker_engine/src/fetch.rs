use std::path::Path;
use std::time::Duration;

use futures_util::StreamExt;
use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::decode::decode_text;
use crate::{CatalogSource, FailureKind, FetchError, FetchMetadata, FetchOutput};

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, source: &CatalogSource) -> Result<FetchOutput, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    settings: FetchSettings,
}

impl ReqwestFetcher {
    pub fn new(settings: FetchSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, FetchError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))
    }

    async fn fetch_url(&self, url: &Url) -> Result<FetchOutput, FetchError> {
        let client = self.build_client()?;
        let response = client
            .get(url.clone())
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(too_large(self.settings.max_bytes, content_len));
            }
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(too_large(self.settings.max_bytes, next_len));
            }
            bytes.extend_from_slice(&chunk);
        }

        finish(url.to_string(), &bytes, content_type)
    }
}

#[async_trait::async_trait]
impl Fetcher for ReqwestFetcher {
    async fn fetch(&self, source: &CatalogSource) -> Result<FetchOutput, FetchError> {
        match source {
            CatalogSource::Http(url) => self.fetch_url(url).await,
            CatalogSource::File(_) => Err(FetchError::new(
                FailureKind::InvalidSource,
                format!("not an http source: {source}"),
            )),
        }
    }
}

/// Reads the catalog from the local filesystem.
#[derive(Debug, Clone)]
pub struct FileFetcher {
    settings: FetchSettings,
}

impl FileFetcher {
    pub fn new(settings: FetchSettings) -> Self {
        Self { settings }
    }

    async fn read(&self, path: &Path) -> Result<FetchOutput, FetchError> {
        let metadata = tokio::fs::metadata(path).await.map_err(io_error)?;
        if metadata.len() > self.settings.max_bytes {
            return Err(too_large(self.settings.max_bytes, metadata.len()));
        }
        let bytes = tokio::time::timeout(self.settings.request_timeout, tokio::fs::read(path))
            .await
            .map_err(|_| FetchError::new(FailureKind::Timeout, "file read timed out"))?
            .map_err(io_error)?;
        finish(path.display().to_string(), &bytes, None)
    }
}

#[async_trait::async_trait]
impl Fetcher for FileFetcher {
    async fn fetch(&self, source: &CatalogSource) -> Result<FetchOutput, FetchError> {
        match source {
            CatalogSource::File(path) => self.read(path).await,
            CatalogSource::Http(_) => Err(FetchError::new(
                FailureKind::InvalidSource,
                format!("not a file source: {source}"),
            )),
        }
    }
}

/// Dispatches on the source kind.
#[derive(Debug, Clone)]
pub struct SourceFetcher {
    http: ReqwestFetcher,
    file: FileFetcher,
}

impl SourceFetcher {
    pub fn new(settings: FetchSettings) -> Self {
        Self {
            http: ReqwestFetcher::new(settings.clone()),
            file: FileFetcher::new(settings),
        }
    }
}

#[async_trait::async_trait]
impl Fetcher for SourceFetcher {
    async fn fetch(&self, source: &CatalogSource) -> Result<FetchOutput, FetchError> {
        match source {
            CatalogSource::Http(_) => self.http.fetch(source).await,
            CatalogSource::File(_) => self.file.fetch(source).await,
        }
    }
}

fn finish(
    source: String,
    bytes: &[u8],
    content_type: Option<String>,
) -> Result<FetchOutput, FetchError> {
    let decoded = decode_text(bytes, content_type.as_deref())
        .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))?;
    Ok(FetchOutput {
        text: decoded.text,
        metadata: FetchMetadata {
            source,
            content_type,
            encoding_label: decoded.encoding_label,
            byte_len: bytes.len() as u64,
        },
    })
}

fn too_large(max_bytes: u64, actual: u64) -> FetchError {
    FetchError::new(
        FailureKind::TooLarge {
            max_bytes,
            actual: Some(actual),
        },
        "catalog too large",
    )
}

fn io_error(err: std::io::Error) -> FetchError {
    FetchError::new(FailureKind::Io, err.to_string())
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
