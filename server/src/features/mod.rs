pub mod auth;
pub mod blogs;
pub mod system;
pub mod users;
