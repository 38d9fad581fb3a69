use actix_web::web;

use crate::handlers::portfolio;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/portfolio")
            .service(
                web::resource("/projects")
                    .route(web::get().to(portfolio::get_projects))
            )
            .service(
                web::resource("/categories")
                    .route(web::get().to(portfolio::get_portfolio_categories))
            )
    );
}
