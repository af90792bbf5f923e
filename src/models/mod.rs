//! Domain models for the user records server.

pub mod user;

pub use user::User;
