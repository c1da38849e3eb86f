pub mod auth;
pub mod notify;
pub mod outcome;
pub mod session;
