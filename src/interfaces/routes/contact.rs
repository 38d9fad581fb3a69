use actix_web::web;

use crate::handlers::contact;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/contact")
            .service(
                web::resource("/validate")
                    .route(web::post().to(contact::validate_contact_form))
            )
    );
}
