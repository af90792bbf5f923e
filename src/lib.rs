//! User Records Server library.
//!
//! This library provides the core functionality for the user records server,
//! including configuration, database access and the HTTP API.

pub mod api;
pub mod config;
pub mod db;
pub mod entity;
pub mod error;
pub mod middleware;
pub mod models;
