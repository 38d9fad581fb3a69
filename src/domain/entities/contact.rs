use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::entities::validation::new_validation_error;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid")
});

/// Contact form as filled in by a visitor. Only checked locally; it is never sent anywhere.
#[derive(Debug, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ContactForm {
    #[validate(custom(function = "validate_name"))]
    pub name: String,

    #[validate(custom(function = "validate_email"))]
    pub email: String,

    #[validate(custom(function = "validate_subject"))]
    pub subject: String,

    #[validate(custom(function = "validate_message"))]
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ContactValidationResponse {
    pub valid: bool,
}

fn required(value: &str, msg: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(new_validation_error("required", msg));
    }
    Ok(())
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    required(name, "Name is required")
}

fn validate_subject(subject: &str) -> Result<(), ValidationError> {
    required(subject, "Subject is required")
}

fn validate_message(message: &str) -> Result<(), ValidationError> {
    required(message, "Message is required")
}

fn validate_email(email: &str) -> Result<(), ValidationError> {
    required(email, "Email is required")?;
    if !EMAIL_PATTERN.is_match(email) {
        return Err(new_validation_error("email", "Email is invalid"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ContactForm {
        ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "Hello".into(),
            message: "I'd like a website.".into(),
        }
    }

    #[test]
    fn complete_form_is_valid() {
        assert!(form().validate().is_ok());
    }

    #[test]
    fn whitespace_only_fields_are_missing() {
        let mut f = form();
        f.name = "   ".into();
        let errors = f.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn email_needs_at_and_dot() {
        let mut f = form();
        f.email = "ada@example".into();
        let errors = f.validate().unwrap_err();
        let email_errors = errors.field_errors().get("email").cloned().unwrap();
        assert_eq!(email_errors[0].message.as_deref(), Some("Email is invalid"));
    }
}
