use std::collections::HashMap;

use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{errors::AppError, AppState};

#[instrument(skip(state, query))]
pub async fn get_projects(
    state: web::Data<AppState>,
    query: web::Query<HashMap<String, String>>,
) -> Result<impl Responder, AppError> {
    let category = query.get("category").map(String::as_str);
    let projects = state.portfolio_handler.get_projects(category).await;

    Ok(HttpResponse::Ok().json(projects))
}

#[instrument(skip(state))]
pub async fn get_portfolio_categories(
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let categories = state.portfolio_handler.get_categories().await;
    Ok(HttpResponse::Ok().json(categories))
}
