use validator::Validate;

use crate::{
    entities::contact::{ContactForm, ContactValidationResponse},
    errors::AppError,
};

/// Local checks for the contact form. Submissions are not delivered anywhere.
#[derive(Debug, Default, Clone, Copy)]
pub struct ContactHandler;

impl ContactHandler {
    pub fn new() -> Self {
        ContactHandler
    }

    /// Validates every field and reports all failures at once.
    pub fn validate_contact_form(&self, form: &ContactForm) -> Result<ContactValidationResponse, AppError> {
        form.validate()?;
        Ok(ContactValidationResponse { valid: true })
    }
}
