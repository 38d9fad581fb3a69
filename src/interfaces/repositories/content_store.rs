use std::collections::HashSet;

use serde_json::Value;
use tracing::instrument;
use validator::Validate;

use crate::{
    entities::{blog_post::BlogPost, ContentRecord},
    errors::AppError,
    source::{ContentError, ContentSource},
};

/// Immutable snapshot of one content collection.
///
/// Built by a single fetch; there is no way to mutate or refresh it afterwards.
/// Callers that want fresh data load a new store.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentStore<T> {
    items: Vec<T>,
}

impl<T> Default for ContentStore<T> {
    fn default() -> Self {
        ContentStore { items: Vec::new() }
    }
}

impl<T: ContentRecord> ContentStore<T> {
    /// Fetches and parses `resource`. Any failure is logged and yields an
    /// empty store, so a broken resource shows up as "no content" rather
    /// than an error page.
    #[instrument(skip(source), fields(kind = T::KIND))]
    pub async fn load<S>(source: &S, resource: &str) -> Self
    where
        S: ContentSource + ?Sized,
    {
        match Self::try_load(source, resource).await {
            Ok(store) => {
                tracing::debug!("Loaded {} {} record(s)", store.len(), T::KIND);
                store
            }
            Err(e) => {
                tracing::error!("Error loading {} records: {}", T::KIND, e);
                Self::default()
            }
        }
    }

    /// Same pipeline as [`ContentStore::load`] but reports the failure.
    pub async fn try_load<S>(source: &S, resource: &str) -> Result<Self, ContentError>
    where
        S: ContentSource + ?Sized,
    {
        let body = source.fetch(resource).await?;
        Self::parse(&body)
            .map_err(|e| ContentError::ParseFailure(source.locate(resource), e.to_string()))
    }

    /// Parses a JSON array of records.
    ///
    /// Only a document that is not a JSON array fails as a whole. Individual
    /// records that do not deserialize or validate are skipped, and so are
    /// records whose unique key was already seen.
    pub fn parse(body: &str) -> Result<Self, serde_json::Error> {
        let raw: Vec<Value> = serde_json::from_str(body)?;
        let mut seen = HashSet::with_capacity(raw.len());
        let mut items = Vec::with_capacity(raw.len());

        for (index, value) in raw.into_iter().enumerate() {
            let mut record: T = match serde_json::from_value(value) {
                Ok(record) => record,
                Err(e) => {
                    tracing::warn!("Skipping malformed {} at index {}: {}", T::KIND, index, e);
                    continue;
                }
            };

            record.normalize();

            if let Err(e) = record.validate() {
                tracing::warn!("Skipping invalid {} at index {}: {}", T::KIND, index, e);
                continue;
            }

            let key = record.unique_key();
            if !seen.insert(key.clone()) {
                tracing::warn!("Skipping duplicate {} `{}` at index {}", T::KIND, key, index);
                continue;
            }

            if let Some(warning) = record.load_warning() {
                tracing::warn!("{} at index {}: {}", T::KIND, index, warning);
            }

            items.push(record);
        }

        Ok(ContentStore { items })
    }
}

impl<T> ContentStore<T> {
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl ContentStore<BlogPost> {
    pub fn find_by_slug(&self, slug: &str) -> Result<&BlogPost, AppError> {
        self.items
            .iter()
            .find(|post| post.slug == slug)
            .ok_or_else(|| AppError::NotFound(format!("Blog post `{}` not found", slug)))
    }
}

#[cfg(test)]
mod tests {
    use std::{
        io,
        sync::{Arc, Mutex},
    };

    use super::*;

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn parse_with_logs(body: &str) -> (ContentStore<BlogPost>, String) {
        let logs = LogBuffer::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        let store = tracing::subscriber::with_default(subscriber, || {
            ContentStore::<BlogPost>::parse(body).unwrap()
        });
        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        (store, output)
    }

    #[test]
    fn dropped_duplicate_does_not_warn_about_its_date() {
        let body = r#"[
            {"id": 1, "title": "Kept", "slug": "same", "date": "2024-01-01"},
            {"id": 2, "title": "Dropped", "slug": "same", "date": "whenever"}
        ]"#;

        let (store, logs) = parse_with_logs(body);

        assert_eq!(store.len(), 1);
        assert!(logs.contains("Skipping duplicate"));
        assert!(!logs.contains("unparseable date"));
    }

    #[test]
    fn kept_record_warns_about_its_date() {
        let body = r#"[{"id": 1, "title": "Undated", "slug": "undated", "date": "whenever"}]"#;

        let (store, logs) = parse_with_logs(body);

        assert_eq!(store.len(), 1);
        assert!(logs.contains("unparseable date `whenever`"));
    }
}
