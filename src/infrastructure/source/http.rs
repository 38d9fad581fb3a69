use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use super::{ContentError, ContentSource};

/// Fetches resources with a plain GET relative to a base URL.
#[derive(Debug, Clone)]
pub struct HttpContentSource {
    client: Client,
    base_url: Url,
}

impl HttpContentSource {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ContentError> {
        let mut base_url = Url::parse(base_url)
            .map_err(|e| ContentError::FetchFailure(base_url.to_string(), e.to_string()))?;

        // Url::join replaces the last segment unless the path is a directory
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ContentError::FetchFailure(base_url.to_string(), e.to_string()))?;

        Ok(HttpContentSource { client, base_url })
    }

    fn resource_url(&self, resource: &str) -> Result<Url, ContentError> {
        self.base_url
            .join(resource.trim_start_matches('/'))
            .map_err(|e| ContentError::FetchFailure(resource.to_string(), e.to_string()))
    }
}

#[async_trait]
impl ContentSource for HttpContentSource {
    async fn fetch(&self, resource: &str) -> Result<String, ContentError> {
        let url = self.resource_url(resource)?;
        let location = url.to_string();

        let response = self.client
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| ContentError::FetchFailure(location.clone(), e.to_string()))?;

        response
            .text()
            .await
            .map_err(|e| ContentError::FetchFailure(location, e.to_string()))
    }

    fn locate(&self, resource: &str) -> String {
        self.resource_url(resource)
            .map(|u| u.to_string())
            .unwrap_or_else(|_| resource.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_resources_under_base_path() {
        let source = HttpContentSource::new("https://example.com/static", Duration::from_secs(1)).unwrap();
        assert_eq!(source.locate("blog.json"), "https://example.com/static/blog.json");
        assert_eq!(source.locate("/portfolio.json"), "https://example.com/static/portfolio.json");
    }

    #[test]
    fn rejects_invalid_base_url() {
        let result = HttpContentSource::new("not a url", Duration::from_secs(1));
        assert!(matches!(result, Err(ContentError::FetchFailure(_, _))));
    }
}
