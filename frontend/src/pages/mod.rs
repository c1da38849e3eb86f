pub mod auth;
pub mod feed;
pub mod home;
pub mod profile;
