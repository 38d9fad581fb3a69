use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    entities::{
        validation::{validate_link, validate_not_blank, validate_slug},
        ContentRecord,
    },
    query::{format_display_date, parse_iso_date, Categorized},
    utils::markdown::{reading_time_minutes, safe_markdown_to_html},
};

// ───── Content Model ─────────────────────────────────────────────────

/// A post as authored in the blog JSON resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct BlogPost {
    pub id: i64,

    #[validate(custom(function = "validate_not_blank"))]
    pub title: String,

    #[serde(default)]
    #[validate(custom(function = "validate_slug"))]
    pub slug: String,

    #[serde(default)]
    pub category: String,

    /// ISO-8601: RFC 3339, `YYYY-MM-DD[ T]HH:MM[:SS]`, `YYYY-MM-DD` or `YYYY-MM`.
    /// Anything else is kept and sorted as oldest, see [`BlogPost::published_at`].
    pub date: String,

    #[serde(default)]
    pub excerpt: String,

    #[serde(default)]
    pub content: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_link"))]
    pub img: Option<String>,
}

impl BlogPost {
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        parse_iso_date(&self.date)
    }

    /// Route of the detail page.
    pub fn path(&self) -> String {
        format!("/blog/{}", urlencoding::encode(&self.slug))
    }
}

impl Categorized for BlogPost {
    fn category(&self) -> &str {
        &self.category
    }
}

impl ContentRecord for BlogPost {
    const KIND: &'static str = "blog post";

    fn unique_key(&self) -> String {
        self.slug.clone()
    }

    fn normalize(&mut self) {
        if self.slug.trim().is_empty() {
            self.slug = slug::slugify(&self.title);
        }
    }

    fn load_warning(&self) -> Option<String> {
        match self.published_at() {
            Some(_) => None,
            None => Some(format!("unparseable date `{}`, sorted as oldest", self.date)),
        }
    }
}

// ───── API Response Models ──────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlogPostListResponse {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub path: String,
    pub category: String,
    pub date: String,
    pub display_date: String,
    pub excerpt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
    pub reading_time_minutes: usize,
}

#[derive(Debug, Serialize)]
pub struct BlogPostDetailResponse {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub category: String,
    pub date: String,
    pub display_date: String,
    pub excerpt: String,
    pub content_html: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
    pub reading_time_minutes: usize,
    pub related: Vec<BlogPostListResponse>,
}

#[derive(Debug, Serialize)]
pub struct BlogListingResponse {
    pub featured: Option<BlogPostListResponse>,
    pub others: Vec<BlogPostListResponse>,
}

// ───── Conversions ──────────────────────────────────────────────────

impl BlogPost {
    pub fn to_list_response(&self) -> BlogPostListResponse {
        BlogPostListResponse {
            id: self.id,
            title: self.title.clone(),
            slug: self.slug.clone(),
            path: self.path(),
            category: self.category.clone(),
            date: self.date.clone(),
            display_date: format_display_date(&self.date),
            excerpt: self.excerpt.clone(),
            img: self.img.clone(),
            reading_time_minutes: reading_time_minutes(&self.content),
        }
    }

    pub fn to_detail_response(&self, related: &[BlogPost]) -> BlogPostDetailResponse {
        BlogPostDetailResponse {
            id: self.id,
            title: self.title.clone(),
            slug: self.slug.clone(),
            category: self.category.clone(),
            date: self.date.clone(),
            display_date: format_display_date(&self.date),
            excerpt: self.excerpt.clone(),
            content_html: safe_markdown_to_html(&self.content),
            img: self.img.clone(),
            reading_time_minutes: reading_time_minutes(&self.content),
            related: related.iter().map(BlogPost::to_list_response).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(slug: &str) -> BlogPost {
        BlogPost {
            id: 1,
            title: "Hello World".into(),
            slug: slug.into(),
            category: "Blog".into(),
            date: "2024-01-01".into(),
            excerpt: "An excerpt".into(),
            content: "Some **content**".into(),
            img: None,
        }
    }

    #[test]
    fn normalize_generates_missing_slug() {
        let mut p = post("");
        p.normalize();
        assert_eq!(p.slug, "hello-world");
        assert!(p.validate().is_ok());
    }

    #[test]
    fn normalize_keeps_authored_slug() {
        let mut p = post("custom-slug");
        p.normalize();
        assert_eq!(p.slug, "custom-slug");
    }

    #[test]
    fn rejects_blank_title() {
        let mut p = post("x");
        p.title = "   ".into();
        assert!(p.validate().is_err());
    }

    #[test]
    fn detail_renders_markdown() {
        let detail = post("hello").to_detail_response(&[]);
        assert!(detail.content_html.contains("<strong>content</strong>"));
        assert_eq!(detail.display_date, "January 1, 2024");
    }

    #[test]
    fn path_is_blog_route() {
        assert_eq!(post("hello-world").path(), "/blog/hello-world");
    }
}
