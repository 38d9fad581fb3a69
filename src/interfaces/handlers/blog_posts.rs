use std::collections::HashMap;

use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    constants::{DEFAULT_RECENT_POSTS, MAX_RECENT_POSTS},
    entities::blog_post::{BlogListingResponse, BlogPost, BlogPostListResponse},
    errors::AppError,
    AppState,
};

fn to_list(posts: &[BlogPost]) -> Vec<BlogPostListResponse> {
    posts.iter().map(BlogPost::to_list_response).collect()
}

#[instrument(skip(state, query))]
pub async fn get_all_blog_posts(
    state: web::Data<AppState>,
    query: web::Query<HashMap<String, String>>,
) -> Result<impl Responder, AppError> {
    let blog_post_handler = &state.blog_handler;

    let category = query.get("category").map(String::as_str);
    let posts = blog_post_handler.get_all_blog_posts(category).await;

    Ok(HttpResponse::Ok().json(to_list(&posts)))
}

#[instrument(skip(state))]
pub async fn get_blog_listing(
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let listing = state.blog_handler.get_blog_listing().await;

    Ok(HttpResponse::Ok().json(BlogListingResponse {
        featured: listing.featured.as_ref().map(BlogPost::to_list_response),
        others: to_list(&listing.others),
    }))
}

#[instrument(skip(state, query))]
pub async fn get_recent_blog_posts(
    state: web::Data<AppState>,
    query: web::Query<HashMap<String, String>>,
) -> Result<impl Responder, AppError> {
    let blog_post_handler = &state.blog_handler;

    let limit = match query.get("limit") {
        Some(raw) => raw
            .trim()
            .parse::<usize>()
            .map_err(|_| AppError::InvalidArgument(format!("limit must be a positive integer, got `{}`", raw)))?
            .min(MAX_RECENT_POSTS),
        None => DEFAULT_RECENT_POSTS,
    };

    let posts = blog_post_handler.get_recent_blog_posts(limit).await?;

    Ok(HttpResponse::Ok().json(to_list(&posts)))
}

#[instrument(skip(state))]
pub async fn get_blog_post_by_slug(
    slug: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let post = state.blog_handler.get_blog_post_by_slug(&slug).await?;
    Ok(HttpResponse::Ok().json(post))
}

#[instrument(skip(state))]
pub async fn get_blog_categories(
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let categories = state.blog_handler.get_categories().await;
    Ok(HttpResponse::Ok().json(categories))
}
