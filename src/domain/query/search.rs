use crate::entities::{
    blog_post::BlogPost,
    page::PageDescriptor,
    search_result::SearchResult,
};

/// Matches beyond this count are dropped.
pub const MAX_SEARCH_RESULTS: usize = 5;

/// Case-insensitive substring search over posts and static pages.
///
/// A post matches when its title, excerpt, content or category contains the
/// query; a page matches on its title only. Posts come first in store order,
/// then pages in list order. A blank query returns nothing.
pub fn search(query: &str, posts: &[BlogPost], pages: &[PageDescriptor]) -> Vec<SearchResult> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    let contains = |haystack: &str| haystack.to_lowercase().contains(&needle);

    let post_hits = posts
        .iter()
        .filter(|post| {
            contains(&post.title)
                || contains(&post.excerpt)
                || contains(&post.content)
                || contains(&post.category)
        })
        .map(SearchResult::from_post);

    let page_hits = pages
        .iter()
        .filter(|page| contains(page.title))
        .map(SearchResult::from_page);

    post_hits.chain(page_hits).take(MAX_SEARCH_RESULTS).collect()
}
