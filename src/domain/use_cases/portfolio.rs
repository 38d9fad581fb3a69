use std::sync::Arc;

use crate::{
    entities::project::PortfolioProject,
    query::{distinct_categories, filter_by_category, ALL_CATEGORIES},
    repositories::content_store::ContentStore,
    source::ContentSource,
};

pub struct PortfolioHandler<S>
where
    S: ContentSource,
{
    pub source: Arc<S>,
    pub resource: String,
}

impl<S> PortfolioHandler<S>
where
    S: ContentSource,
{
    pub fn new(source: Arc<S>, resource: impl Into<String>) -> Self {
        PortfolioHandler { source, resource: resource.into() }
    }

    pub async fn load_projects(&self) -> ContentStore<PortfolioProject> {
        ContentStore::load(self.source.as_ref(), &self.resource).await
    }

    /// Projects in authored order, optionally narrowed to one category.
    pub async fn get_projects(&self, category: Option<&str>) -> Vec<PortfolioProject> {
        let store = self.load_projects().await;

        match category {
            Some(category) => filter_by_category(store.items(), category),
            None => store.items().to_vec(),
        }
    }

    pub async fn get_categories(&self) -> Vec<String> {
        let store = self.load_projects().await;
        std::iter::once(ALL_CATEGORIES[0].to_string())
            .chain(distinct_categories(store.items()))
            .collect()
    }
}
