use std::cmp::Reverse;

use serde::Serialize;

use crate::entities::blog_post::BlogPost;

use super::{Categorized, QueryError, ALL_CATEGORIES};

/// Newest first. The sort is stable, and posts whose date does not parse are
/// placed after every dated post.
pub fn sort_by_date_descending(posts: &[BlogPost]) -> Vec<BlogPost> {
    let mut sorted = posts.to_vec();
    // Reverse(None) > Reverse(Some(_)), so undated posts end up last
    sorted.sort_by_cached_key(|post| Reverse(post.published_at()));
    sorted
}

/// The first `n` items, or all of them when there are fewer.
pub fn paginate_first_n<T: Clone>(items: &[T], n: usize) -> Result<Vec<T>, QueryError> {
    if n == 0 {
        return Err(QueryError::InvalidArgument(
            "page size must be a positive integer".to_string(),
        ));
    }
    Ok(items.iter().take(n).cloned().collect())
}

/// Exact, case-sensitive category match. `"All Categories"` and `"all"` return
/// the input unchanged.
pub fn filter_by_category<T: Categorized + Clone>(items: &[T], category: &str) -> Vec<T> {
    if ALL_CATEGORIES.contains(&category) {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.category() == category)
        .cloned()
        .collect()
}

/// Category labels in the order they first appear. Uncategorized items are skipped.
pub fn distinct_categories<T: Categorized>(items: &[T]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for item in items {
        if item.category().trim().is_empty() {
            continue;
        }
        if !categories.iter().any(|c| c == item.category()) {
            categories.push(item.category().to_string());
        }
    }
    categories
}

/// Up to `limit` other posts sharing `post`'s category, newest first.
pub fn related_posts(posts: &[BlogPost], post: &BlogPost, limit: usize) -> Vec<BlogPost> {
    let same_category: Vec<BlogPost> = posts
        .iter()
        .filter(|p| p.slug != post.slug && p.category == post.category)
        .cloned()
        .collect();

    sort_by_date_descending(&same_category)
        .into_iter()
        .take(limit)
        .collect()
}

#[derive(Debug, Serialize, PartialEq)]
pub struct FeaturedSplit<T> {
    pub featured: Option<T>,
    pub others: Vec<T>,
}

/// Splits an already ordered list into its head and the rest.
pub fn split_featured<T: Clone>(items: &[T]) -> FeaturedSplit<T> {
    match items.split_first() {
        Some((first, rest)) => FeaturedSplit {
            featured: Some(first.clone()),
            others: rest.to_vec(),
        },
        None => FeaturedSplit {
            featured: None,
            others: Vec::new(),
        },
    }
}
