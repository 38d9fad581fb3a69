use std::borrow::Cow;

use validator::ValidationError;

pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(new_validation_error("blank", "Value cannot be blank"));
    }
    Ok(())
}

/// URL-safe routing key: ASCII letters, digits, `-` and `_`.
pub fn validate_slug(slug: &str) -> Result<(), ValidationError> {
    if slug.is_empty() {
        return Err(new_validation_error("slug_empty", "Slug cannot be empty"));
    }
    if !slug.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
        return Err(new_validation_error("slug_invalid_chars", "Slug must contain only letters, digits, hyphens or underscores"));
    }
    if slug.starts_with('-') || slug.ends_with('-') {
        return Err(new_validation_error("slug_edge_hyphen", "Slug must not start or end with a hyphen"));
    }
    Ok(())
}

/// An absolute http(s) URL or a site-relative path.
pub fn validate_link(link: &str) -> Result<(), ValidationError> {
    if link.starts_with('/') && !link.starts_with("//") {
        return Ok(());
    }
    match url::Url::parse(link) {
        Ok(parsed) if parsed.scheme() == "http" || parsed.scheme() == "https" => Ok(()),
        Ok(_) => Err(new_validation_error("invalid_url_scheme", "URL must start with http:// or https://")),
        Err(_) => Err(new_validation_error("invalid_url", "Invalid URL format")),
    }
}

pub fn new_validation_error(code: &'static str, msg: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(msg));
    err
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs() {
        assert!(validate_slug("getting-started_2024").is_ok());
        assert!(validate_slug("").is_err());
        assert!(validate_slug("-leading").is_err());
        assert!(validate_slug("has space").is_err());
        assert!(validate_slug("a/b").is_err());
    }

    #[test]
    fn links() {
        assert!(validate_link("/images/cover.png").is_ok());
        assert!(validate_link("https://example.com/shop").is_ok());
        assert!(validate_link("//evil.example.com").is_err());
        assert!(validate_link("javascript:alert(1)").is_err());
        assert!(validate_link("images/cover.png").is_err());
    }
}
