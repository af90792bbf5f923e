//! HTTP test suite for the user endpoints.
//!
//! Drives the actix app against an in-memory repository, so no database is
//! needed.
//!
//! Run with: cargo test --test users_api

mod test_helpers;

mod test_create_and_list;
mod test_update;
