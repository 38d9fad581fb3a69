use actix_web::{get, HttpResponse, Responder};

#[get("/")]
pub async fn home() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Portfolio site content API",
        "status": "Ok",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "posts": "/api/v1/blog/posts",
            "projects": "/api/v1/portfolio/projects",
            "pages": "/api/v1/pages",
            "search": "/api/v1/search?q=",
            "health": "/api/v1/system/health"
        }
    }))
}
