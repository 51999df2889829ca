pub mod auth_pages;
pub mod embed;
pub mod layout;
pub mod pages;
