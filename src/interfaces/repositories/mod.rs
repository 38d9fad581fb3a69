pub mod content_store;
