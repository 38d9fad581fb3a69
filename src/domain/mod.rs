pub mod entities;
pub mod query;
pub mod use_cases;
