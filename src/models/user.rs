//! User record as exchanged with clients.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A user record.
///
/// Every field defaults when missing from a request body, so partial
/// updates bind. An empty string means "not supplied" for update purposes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct User {
    /// Server-assigned identifier. Required (non-zero) for updates.
    pub user_id: i32,
    pub user_name: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Single-character status code (e.g. `A`, `T`, `I`), validated by the store.
    #[schema(example = "A")]
    pub user_status: String,
    pub department: String,
}
