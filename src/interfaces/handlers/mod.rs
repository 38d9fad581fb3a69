pub mod blog_posts;
pub mod contact;
pub mod home;
pub mod json_error;
pub mod pages;
pub mod portfolio;
pub mod search;
pub mod system;
