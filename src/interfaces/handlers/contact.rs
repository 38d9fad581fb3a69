use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{entities::contact::ContactForm, errors::AppError, AppState};

#[instrument(skip(state, form))]
pub async fn validate_contact_form(
    state: web::Data<AppState>,
    form: web::Json<ContactForm>,
) -> Result<impl Responder, AppError> {
    let response = state.contact_handler.validate_contact_form(&form)?;
    Ok(HttpResponse::Ok().json(response))
}
