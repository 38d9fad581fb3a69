use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    entities::{
        validation::{validate_link, validate_not_blank},
        ContentRecord,
    },
    query::Categorized,
};

/// An entry of the portfolio gallery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct PortfolioProject {
    pub id: i64,

    #[validate(custom(function = "validate_not_blank"))]
    pub title: String,

    #[serde(default)]
    pub category: String,

    #[validate(custom(function = "validate_link"))]
    pub image: String,

    #[validate(custom(function = "validate_link"))]
    pub url: String,
}

impl Categorized for PortfolioProject {
    fn category(&self) -> &str {
        &self.category
    }
}

impl ContentRecord for PortfolioProject {
    const KIND: &'static str = "portfolio project";

    fn unique_key(&self) -> String {
        self.id.to_string()
    }
}
