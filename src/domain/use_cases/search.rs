use std::sync::Arc;

use crate::{
    entities::{
        blog_post::BlogPost,
        page::{PageDescriptor, SITE_PAGES},
        search_result::SearchResponse,
    },
    query::search,
    repositories::content_store::ContentStore,
    source::ContentSource,
};

pub struct SearchHandler<S>
where
    S: ContentSource,
{
    pub source: Arc<S>,
    pub resource: String,
    pub pages: &'static [PageDescriptor],
}

impl<S> SearchHandler<S>
where
    S: ContentSource,
{
    pub fn new(source: Arc<S>, resource: impl Into<String>) -> Self {
        SearchHandler { source, resource: resource.into(), pages: SITE_PAGES }
    }

    /// Runs a site search. A blank query returns no results without touching the source.
    pub async fn search(&self, query: &str) -> SearchResponse {
        let query = query.trim();
        if query.is_empty() {
            return SearchResponse { query: String::new(), results: Vec::new() };
        }

        let store: ContentStore<BlogPost> = ContentStore::load(self.source.as_ref(), &self.resource).await;
        let results = search(query, store.items(), self.pages);

        tracing::debug!("Search for {:?} matched {} result(s)", query, results.len());

        SearchResponse { query: query.to_string(), results }
    }
}
