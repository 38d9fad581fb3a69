use serde::Serialize;

use crate::entities::{blog_post::BlogPost, page::PageDescriptor};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchResultKind {
    Blog,
    Page,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    #[serde(rename = "type")]
    pub kind: SearchResultKind,
    pub title: String,
    /// Route to navigate to.
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl SearchResult {
    pub fn from_post(post: &BlogPost) -> Self {
        SearchResult {
            kind: SearchResultKind::Blog,
            title: post.title.clone(),
            slug: post.path(),
            excerpt: Some(post.excerpt.clone()),
            category: Some(post.category.clone()),
        }
    }

    pub fn from_page(page: &PageDescriptor) -> Self {
        SearchResult {
            kind: SearchResultKind::Page,
            title: page.title.to_string(),
            slug: page.slug.to_string(),
            excerpt: None,
            category: None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<SearchResult>,
}
