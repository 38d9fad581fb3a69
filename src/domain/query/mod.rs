//! Pure operations over a loaded content snapshot.
//!
//! Nothing in here performs I/O or keeps state between calls: the same input
//! always yields the same output, so handlers can re-run any of these on every
//! request.

use derive_more::Display;

mod dates;
mod listing;
mod search;

pub use dates::{format_display_date, parse_iso_date};
pub use listing::{
    distinct_categories, filter_by_category, paginate_first_n, related_posts,
    sort_by_date_descending, split_featured, FeaturedSplit,
};
pub use search::{search, MAX_SEARCH_RESULTS};

/// Category values that disable filtering.
pub const ALL_CATEGORIES: [&str; 2] = ["All Categories", "all"];

#[derive(Debug, Display, Clone, PartialEq)]
pub enum QueryError {
    #[display("{_0}")]
    InvalidArgument(String),
}

impl std::error::Error for QueryError {}

/// Records that carry a free-text category label.
pub trait Categorized {
    fn category(&self) -> &str;
}
