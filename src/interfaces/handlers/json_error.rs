use actix_web::{http::StatusCode, HttpRequest, HttpResponse};

pub fn json_error(status: StatusCode, error: &str, details: &str) -> HttpResponse {
    HttpResponse::build(status).json(serde_json::json!({
        "error": error,
        "details": details
    }))
}

/// Fallback for paths no route matches.
pub async fn route_not_found(req: HttpRequest) -> HttpResponse {
    json_error(
        StatusCode::NOT_FOUND,
        "not_found",
        &format!("No route for {} {}", req.method(), req.path()),
    )
}
