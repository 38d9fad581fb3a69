use actix_web::{HttpResponse, Responder};

use crate::entities::page::SITE_PAGES;

pub async fn list_pages() -> impl Responder {
    HttpResponse::Ok().json(SITE_PAGES)
}
