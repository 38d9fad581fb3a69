use std::sync::Arc;

mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;
pub mod telemetry;

pub use domain::{entities, query, use_cases};
pub use interfaces::{handlers, repositories, routes};
pub use infrastructure::{source, utils};

use source::SiteContentSource;
use use_cases::{
    blog::BlogPostHandler, contact::ContactHandler, portfolio::PortfolioHandler,
    search::SearchHandler,
};

pub struct AppState {
    pub blog_handler: AppBlogHandler,
    pub portfolio_handler: AppPortfolioHandler,
    pub search_handler: AppSearchHandler,
    pub contact_handler: ContactHandler,
    pub source: Arc<SiteContentSource>,
    pub blog_resource: String,
    pub portfolio_resource: String,
}

pub type AppBlogHandler = BlogPostHandler<SiteContentSource>;
pub type AppPortfolioHandler = PortfolioHandler<SiteContentSource>;
pub type AppSearchHandler = SearchHandler<SiteContentSource>;

impl AppState {
    pub fn new(config: &settings::AppConfig, source: SiteContentSource) -> Self {
        let source = Arc::new(source);

        AppState {
            blog_handler: BlogPostHandler::new(source.clone(), &config.blog_resource),
            portfolio_handler: PortfolioHandler::new(source.clone(), &config.portfolio_resource),
            search_handler: SearchHandler::new(source.clone(), &config.blog_resource),
            contact_handler: ContactHandler::new(),
            source,
            blog_resource: config.blog_resource.clone(),
            portfolio_resource: config.portfolio_resource.clone(),
        }
    }
}
