use actix_web::web;

use crate::handlers::pages;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/pages")
            .route(web::get().to(pages::list_pages))
    );
}
