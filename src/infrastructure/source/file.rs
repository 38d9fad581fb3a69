use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use super::{ContentError, ContentSource};

/// Reads resources from a directory on disk, the way a static host would serve them.
#[derive(Debug, Clone)]
pub struct FileContentSource {
    root: PathBuf,
}

impl FileContentSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FileContentSource { root: root.into() }
    }

    fn resource_path(&self, resource: &str) -> Result<PathBuf, ContentError> {
        let relative = Path::new(resource.trim_start_matches('/'));
        let escapes_root = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));

        if escapes_root || relative.as_os_str().is_empty() {
            return Err(ContentError::FetchFailure(
                resource.to_string(),
                "resource path must stay inside the content directory".to_string(),
            ));
        }

        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl ContentSource for FileContentSource {
    async fn fetch(&self, resource: &str) -> Result<String, ContentError> {
        let path = self.resource_path(resource)?;

        fs::read_to_string(&path)
            .await
            .map_err(|e| ContentError::FetchFailure(path.display().to_string(), e.to_string()))
    }

    fn locate(&self, resource: &str) -> String {
        self.root.join(resource.trim_start_matches('/')).display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn refuses_paths_outside_root() {
        let source = FileContentSource::new("public");
        let err = source.fetch("../Cargo.toml").await.unwrap_err();
        assert!(matches!(err, ContentError::FetchFailure(_, _)));
    }

    #[tokio::test]
    async fn missing_file_is_a_fetch_failure() {
        let source = FileContentSource::new("tests/fixtures");
        let err = source.fetch("does-not-exist.json").await.unwrap_err();
        assert!(matches!(err, ContentError::FetchFailure(_, _)));
    }

    #[tokio::test]
    async fn reads_fixture_resource() {
        let source = FileContentSource::new("tests/fixtures");
        let body = source.fetch("blog.json").await.unwrap();
        assert!(body.trim_start().starts_with('['));
    }
}
