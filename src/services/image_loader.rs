use base64::Engine as _;
use std::net::IpAddr;
use std::path::PathBuf;
use std::time::Duration;
use swatch_engine::{Color, EngineError};
use thiserror::Error;

use crate::models::AppConfig;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Invalid image URL: {0}")]
    InvalidUrl(String),

    #[error("Refusing to fetch from private address: {0}")]
    PrivateHost(String),

    #[error("Failed to resolve image host: {0}")]
    Resolve(String),

    #[error("Failed to fetch image: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Image request returned HTTP {0}")]
    UpstreamStatus(u16),

    #[error("Image too large: {size} bytes (max {max})")]
    TooLarge { size: usize, max: usize },

    #[error("Invalid base64 image data: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Failed to read image file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode image: {0}")]
    Decode(#[from] EngineError),

    #[error("Extraction task failed: {0}")]
    Task(String),
}

/// Where an image comes from
#[derive(Debug, Clone, PartialEq)]
pub enum ImageSource {
    /// http(s) URL fetched with the configured timeout
    Url(String),
    /// Base64 payload, optionally wrapped in a `data:` URL
    Data(String),
    /// Local file
    Path(PathBuf),
}

/// Loads encoded images and runs palette extraction off the async runtime
pub struct ImageLoader {
    client: reqwest::Client,
    max_bytes: usize,
    allow_private_hosts: bool,
}

impl ImageLoader {
    pub fn new(config: &AppConfig) -> Result<Self, LoadError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.fetch_timeout_secs))
            .user_agent(concat!("swatchbook/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            max_bytes: config.max_image_bytes,
            allow_private_hosts: config.allow_private_hosts,
        })
    }

    /// Load the encoded image bytes.
    pub async fn load_bytes(&self, source: &ImageSource) -> Result<Vec<u8>, LoadError> {
        let bytes = match source {
            ImageSource::Url(url) => self.fetch(url).await?,
            ImageSource::Data(data) => decode_base64(data)?,
            ImageSource::Path(path) => {
                let size = tokio::fs::metadata(path).await?.len() as usize;
                self.check_size(size)?;
                tokio::fs::read(path).await?
            }
        };
        self.check_size(bytes.len())?;
        Ok(bytes)
    }

    /// Load, decode and extract up to five dominant colors.
    ///
    /// An image without opaque pixels yields an empty list, not an error.
    pub async fn extract(&self, source: &ImageSource) -> Result<Vec<Color>, LoadError> {
        let bytes = self.load_bytes(source).await?;
        let byte_count = bytes.len();

        let colors = tokio::task::spawn_blocking(move || swatch_engine::extract_from_bytes(&bytes))
            .await
            .map_err(|e| LoadError::Task(e.to_string()))??;

        tracing::debug!(bytes = byte_count, colors = colors.len(), "Extracted palette");
        Ok(colors)
    }

    async fn fetch(&self, url: &str) -> Result<Vec<u8>, LoadError> {
        let parsed =
            reqwest::Url::parse(url).map_err(|_| LoadError::InvalidUrl(url.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(LoadError::InvalidUrl(url.to_string()));
        }
        if !self.allow_private_hosts {
            check_public_host(&parsed).await?;
        }

        tracing::debug!(url = %url, "Fetching image");
        let mut response = self.client.get(parsed).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %url, status = status.as_u16(), "Image fetch failed");
            return Err(LoadError::UpstreamStatus(status.as_u16()));
        }
        if let Some(length) = response.content_length() {
            self.check_size(length as usize)?;
        }

        // Chunked bodies have no length up front; stop as soon as the limit is passed
        let mut body = Vec::new();
        while let Some(chunk) = response.chunk().await? {
            self.check_size(body.len() + chunk.len())?;
            body.extend_from_slice(&chunk);
        }
        Ok(body)
    }

    fn check_size(&self, size: usize) -> Result<(), LoadError> {
        if size > self.max_bytes {
            return Err(LoadError::TooLarge {
                size,
                max: self.max_bytes,
            });
        }
        Ok(())
    }
}

/// Reject URLs whose host is, or resolves to, a non-public address.
///
/// The check runs before the request; a host that changes its DNS answer
/// between the two lookups is not caught.
async fn check_public_host(url: &reqwest::Url) -> Result<(), LoadError> {
    let host = url
        .host_str()
        .ok_or_else(|| LoadError::InvalidUrl(url.to_string()))?;
    let literal = host.trim_start_matches('[').trim_end_matches(']');

    let addresses: Vec<IpAddr> = match literal.parse::<IpAddr>() {
        Ok(ip) => vec![ip],
        Err(_) => {
            let port = url.port_or_known_default().unwrap_or(80);
            tokio::net::lookup_host((literal, port))
                .await
                .map_err(|e| LoadError::Resolve(format!("{host}: {e}")))?
                .map(|addr| addr.ip())
                .collect()
        }
    };

    match addresses.into_iter().find(|ip| is_private_address(*ip)) {
        Some(ip) => {
            tracing::warn!(host = %host, ip = %ip, "Blocked image fetch to private address");
            Err(LoadError::PrivateHost(host.to_string()))
        }
        None => Ok(()),
    }
}

/// Loopback, private, link-local, shared (CGNAT) and unspecified ranges.
fn is_private_address(ip: IpAddr) -> bool {
    match ip {
        IpAddr::V4(v4) => {
            let [a, b, ..] = v4.octets();
            v4.is_loopback()
                || v4.is_private()
                || v4.is_link_local()
                || v4.is_unspecified()
                || v4.is_broadcast()
                || (a == 100 && (b & 0xc0) == 64)
        }
        IpAddr::V6(v6) => {
            if let Some(v4) = v6.to_ipv4_mapped() {
                return is_private_address(IpAddr::V4(v4));
            }
            let first = v6.segments()[0];
            v6.is_loopback()
                || v6.is_unspecified()
                || (first & 0xfe00) == 0xfc00
                || (first & 0xffc0) == 0xfe80
        }
    }
}

fn decode_base64(data: &str) -> Result<Vec<u8>, LoadError> {
    let payload = match data.strip_prefix("data:") {
        Some(rest) => rest.split_once(',').map(|(_, b64)| b64).unwrap_or(rest),
        None => data,
    };
    Ok(base64::engine::general_purpose::STANDARD.decode(payload.trim())?)
}
