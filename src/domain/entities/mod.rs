use serde::de::DeserializeOwned;
use validator::Validate;

pub mod blog_post;
pub mod contact;
pub mod page;
pub mod project;
pub mod search_result;
pub mod validation;

/// A record that can be loaded from a static JSON collection.
pub trait ContentRecord: DeserializeOwned + Validate + Clone + Send + Sync + 'static {
    /// Name used in log lines, e.g. `"blog post"`.
    const KIND: &'static str;

    /// Key that must be unique within a loaded collection.
    fn unique_key(&self) -> String;

    /// Fills in derivable fields before validation.
    fn normalize(&mut self) {}

    /// Something worth logging about an otherwise acceptable record.
    fn load_warning(&self) -> Option<String> {
        None
    }
}
