use std::collections::HashMap;

use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{errors::AppError, AppState};

#[instrument(skip(state, query))]
pub async fn search_site(
    state: web::Data<AppState>,
    query: web::Query<HashMap<String, String>>,
) -> Result<impl Responder, AppError> {
    let q = query.get("q").map(String::as_str).unwrap_or_default();
    let response = state.search_handler.search(q).await;

    Ok(HttpResponse::Ok().json(response))
}
