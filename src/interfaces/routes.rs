use actix_web::web;

use crate::handlers::home::home;

mod blog;
mod contact;
mod json_error;
mod pages;
mod portfolio;
mod search;
mod system;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);

    cfg.service(
        web::scope("/api/v1")
            .configure(blog::config_routes)
            .configure(portfolio::config_routes)
            .configure(pages::config_routes)
            .configure(search::config_routes)
            .configure(contact::config_routes)
            .configure(system::config_routes)
    );

    cfg.configure(json_error::config_routes);
}
