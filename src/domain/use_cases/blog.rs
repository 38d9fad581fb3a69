use std::sync::Arc;

use crate::{
    entities::blog_post::{BlogPost, BlogPostDetailResponse},
    errors::AppError,
    query::{
        distinct_categories, filter_by_category, paginate_first_n, related_posts,
        sort_by_date_descending, split_featured, FeaturedSplit, ALL_CATEGORIES,
    },
    repositories::content_store::ContentStore,
    source::ContentSource,
};

pub const RELATED_POSTS: usize = 2;

pub struct BlogPostHandler<S>
where
    S: ContentSource,
{
    pub source: Arc<S>,
    pub resource: String,
}

impl<S> BlogPostHandler<S>
where
    S: ContentSource,
{
    pub fn new(source: Arc<S>, resource: impl Into<String>) -> Self {
        BlogPostHandler { source, resource: resource.into() }
    }

    /// Fresh snapshot of the blog resource; never fails, see [`ContentStore::load`].
    pub async fn load_posts(&self) -> ContentStore<BlogPost> {
        ContentStore::load(self.source.as_ref(), &self.resource).await
    }

    /// All posts newest first, optionally narrowed to one category.
    pub async fn get_all_blog_posts(&self, category: Option<&str>) -> Vec<BlogPost> {
        let store = self.load_posts().await;
        let sorted = sort_by_date_descending(store.items());

        match category {
            Some(category) => filter_by_category(&sorted, category),
            None => sorted,
        }
    }

    /// The newest post plus the remaining ones, as laid out on the blog index.
    pub async fn get_blog_listing(&self) -> FeaturedSplit<BlogPost> {
        let store = self.load_posts().await;
        split_featured(&sort_by_date_descending(store.items()))
    }

    /// The `limit` newest posts.
    pub async fn get_recent_blog_posts(&self, limit: usize) -> Result<Vec<BlogPost>, AppError> {
        let store = self.load_posts().await;
        let posts = paginate_first_n(&sort_by_date_descending(store.items()), limit)?;
        Ok(posts)
    }

    /// Looks a post up by slug and renders it together with related posts.
    pub async fn get_blog_post_by_slug(&self, slug: &str) -> Result<BlogPostDetailResponse, AppError> {
        let store = self.load_posts().await;
        let post = store.find_by_slug(slug)?;
        let related = related_posts(store.items(), post, RELATED_POSTS);

        Ok(post.to_detail_response(&related))
    }

    /// Filter options: the pass-through entry followed by every category in use.
    pub async fn get_categories(&self) -> Vec<String> {
        let store = self.load_posts().await;
        std::iter::once(ALL_CATEGORIES[0].to_string())
            .chain(distinct_categories(store.items()))
            .collect()
    }
}
