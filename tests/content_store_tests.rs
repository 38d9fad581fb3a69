use std::sync::Arc;

use async_trait::async_trait;
use mockall::{mock, predicate::eq};
use portfolio_site::{
    entities::{blog_post::BlogPost, project::PortfolioProject},
    errors::AppError,
    repositories::content_store::ContentStore,
    source::{ContentError, ContentSource, FileContentSource},
    use_cases::{blog::BlogPostHandler, portfolio::PortfolioHandler, search::SearchHandler},
};

mock! {
    pub Source {}

    #[async_trait]
    impl ContentSource for Source {
        async fn fetch(&self, resource: &str) -> Result<String, ContentError>;
        fn locate(&self, resource: &str) -> String;
    }
}

const POSTS: &str = r#"[
    {"id": 1, "title": "Old", "slug": "old", "category": "Rust", "date": "2023-01-01", "excerpt": "", "content": ""},
    {"id": 2, "title": "New", "slug": "new", "category": "Rust", "date": "2024-01-01", "excerpt": "", "content": ""},
    {"id": 3, "title": "Mid", "slug": "mid", "category": "Design", "date": "2023-06-01", "excerpt": "", "content": ""}
]"#;

fn serving(body: &'static str) -> MockSource {
    let mut source = MockSource::new();
    source.expect_fetch().returning(move |_| Ok(body.to_string()));
    source.expect_locate().returning(|r| format!("mock://{}", r));
    source
}

fn failing() -> MockSource {
    let mut source = MockSource::new();
    source
        .expect_fetch()
        .returning(|r| Err(ContentError::FetchFailure(r.to_string(), "connection refused".into())));
    source.expect_locate().returning(|r| format!("mock://{}", r));
    source
}

#[tokio::test]
async fn fetch_failure_yields_empty_store() {
    let store: ContentStore<BlogPost> = ContentStore::load(&failing(), "blog.json").await;
    assert!(store.is_empty());
}

#[tokio::test]
async fn try_load_reports_fetch_failure() {
    let err = ContentStore::<BlogPost>::try_load(&failing(), "blog.json").await.unwrap_err();
    assert!(matches!(err, ContentError::FetchFailure(_, _)));
}

#[tokio::test]
async fn non_array_document_is_a_parse_failure() {
    let source = serving(r#"{"posts": []}"#);

    let err = ContentStore::<BlogPost>::try_load(&source, "blog.json").await.unwrap_err();
    assert!(matches!(err, ContentError::ParseFailure(ref loc, _) if loc == "mock://blog.json"));

    let store: ContentStore<BlogPost> = ContentStore::load(&source, "blog.json").await;
    assert!(store.is_empty());
}

#[tokio::test]
async fn fixture_posts_apply_load_policies() {
    let source = FileContentSource::new("tests/fixtures");

    let store: ContentStore<BlogPost> = ContentStore::try_load(&source, "blog.json").await.unwrap();

    let ids: Vec<i64> = store.items().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 5]);

    let tailwind = store.find_by_slug("mastering-tailwind").unwrap();
    assert_eq!(tailwind.id, 2);

    let generated = store.find_by_slug("notes-from-a-conference").unwrap();
    assert_eq!(generated.id, 5);
}

#[tokio::test]
async fn fixture_projects_drop_duplicates_and_unsafe_links() {
    let source = FileContentSource::new("tests/fixtures");

    let store: ContentStore<PortfolioProject> =
        ContentStore::try_load(&source, "portfolio.json").await.unwrap();

    let titles: Vec<&str> = store.items().iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Campus Portal", "Daily Ledger", "Learnly"]);
}

#[test]
fn find_by_slug_reports_not_found() {
    let store = ContentStore::<BlogPost>::parse(POSTS).unwrap();
    assert!(matches!(store.find_by_slug("missing"), Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn recent_posts_come_newest_first() {
    let handler = BlogPostHandler::new(Arc::new(serving(POSTS)), "blog.json");

    let recent = handler.get_recent_blog_posts(2).await.unwrap();

    let slugs: Vec<&str> = recent.iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(slugs, vec!["new", "mid"]);
}

#[tokio::test]
async fn recent_posts_reject_zero() {
    let handler = BlogPostHandler::new(Arc::new(serving(POSTS)), "blog.json");

    let err = handler.get_recent_blog_posts(0).await.unwrap_err();
    assert!(matches!(err, AppError::InvalidArgument(_)));
}

#[tokio::test]
async fn post_detail_lists_related_posts() {
    let handler = BlogPostHandler::new(Arc::new(serving(POSTS)), "blog.json");

    let detail = handler.get_blog_post_by_slug("old").await.unwrap();

    assert_eq!(detail.title, "Old");
    let related: Vec<&str> = detail.related.iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(related, vec!["new"]);
}

#[tokio::test]
async fn post_detail_on_failing_source_is_not_found() {
    let handler = BlogPostHandler::new(Arc::new(failing()), "blog.json");

    let err = handler.get_blog_post_by_slug("old").await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn listing_features_newest_post() {
    let handler = BlogPostHandler::new(Arc::new(serving(POSTS)), "blog.json");

    let listing = handler.get_blog_listing().await;

    assert_eq!(listing.featured.map(|p| p.slug), Some("new".to_string()));
    assert_eq!(listing.others.len(), 2);
}

#[tokio::test]
async fn blog_categories_lead_with_sentinel() {
    let handler = BlogPostHandler::new(Arc::new(serving(POSTS)), "blog.json");

    assert_eq!(handler.get_categories().await, vec!["All Categories", "Rust", "Design"]);
}

#[tokio::test]
async fn search_skips_fetch_for_blank_query() {
    let mut source = MockSource::new();
    source.expect_fetch().times(0);

    let handler = SearchHandler::new(Arc::new(source), "blog.json");
    let response = handler.search("   ").await;

    assert!(response.results.is_empty());
}

#[tokio::test]
async fn search_fetches_the_blog_resource_once() {
    let mut source = MockSource::new();
    source
        .expect_fetch()
        .with(eq("blog.json"))
        .times(1)
        .returning(|_| Ok(POSTS.to_string()));
    source.expect_locate().returning(|r| r.to_string());

    let handler = SearchHandler::new(Arc::new(source), "blog.json");
    let response = handler.search("design").await;

    let titles: Vec<&str> = response.results.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Mid"]);
}

#[tokio::test]
async fn projects_filter_by_category() {
    let body = r#"[
        {"id": 1, "title": "A", "category": "Edu", "image": "/a.png", "url": "https://a.example"},
        {"id": 2, "title": "B", "category": "Blog", "image": "/b.png", "url": "https://b.example"},
        {"id": 3, "title": "C", "category": "Edu", "image": "/c.png", "url": "https://c.example"}
    ]"#;
    let handler = PortfolioHandler::new(Arc::new(serving(body)), "portfolio.json");

    let edu: Vec<i64> = handler.get_projects(Some("Edu")).await.iter().map(|p| p.id).collect();
    assert_eq!(edu, vec![1, 3]);

    assert_eq!(handler.get_projects(Some("all")).await.len(), 3);
    assert_eq!(handler.get_categories().await, vec!["All Categories", "Edu", "Blog"]);
}

#[tokio::test]
async fn file_with_wrong_shape_loads_nothing() {
    let source = FileContentSource::new("tests/fixtures");

    let err = ContentStore::<PortfolioProject>::try_load(&source, "not-an-array.json").await.unwrap_err();
    assert!(matches!(err, ContentError::ParseFailure(_, _)));

    let store: ContentStore<PortfolioProject> = ContentStore::load(&source, "not-an-array.json").await;
    assert!(store.is_empty());
}
