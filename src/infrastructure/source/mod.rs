use async_trait::async_trait;
use derive_more::Display;

use crate::settings::{AppConfig, ContentSourceKind};

mod file;
mod http;

pub use file::FileContentSource;
pub use http::HttpContentSource;

/// Failures while obtaining a content resource.
#[derive(Debug, Display, Clone, PartialEq)]
pub enum ContentError {
    #[display("Failed to fetch {_0}: {_1}")]
    FetchFailure(String, String),

    #[display("Failed to parse {_0}: {_1}")]
    ParseFailure(String, String),
}

impl std::error::Error for ContentError {}

/// Read access to the static JSON documents that back the site.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Returns the raw body of `resource` (e.g. `blog.json`).
    async fn fetch(&self, resource: &str) -> Result<String, ContentError>;

    /// Human readable location of `resource`, used in logs.
    fn locate(&self, resource: &str) -> String;
}

/// The source selected by configuration.
#[derive(Debug, Clone)]
pub enum SiteContentSource {
    Http(HttpContentSource),
    File(FileContentSource),
}

impl SiteContentSource {
    pub fn from_config(config: &AppConfig) -> Result<Self, ContentError> {
        match config.content_source {
            ContentSourceKind::Http => {
                HttpContentSource::new(&config.content_base_url, config.fetch_timeout())
                    .map(SiteContentSource::Http)
            }
            ContentSourceKind::File => {
                Ok(SiteContentSource::File(FileContentSource::new(&config.content_dir)))
            }
        }
    }
}

#[async_trait]
impl ContentSource for SiteContentSource {
    async fn fetch(&self, resource: &str) -> Result<String, ContentError> {
        match self {
            SiteContentSource::Http(source) => source.fetch(resource).await,
            SiteContentSource::File(source) => source.fetch(resource).await,
        }
    }

    fn locate(&self, resource: &str) -> String {
        match self {
            SiteContentSource::Http(source) => source.locate(resource),
            SiteContentSource::File(source) => source.locate(resource),
        }
    }
}
