use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;

/// Status assigned to a freshly created account unless the caller overrides it.
/// `"new"` is the other value seen in the wild; nothing here sets it.
pub const DEFAULT_USER_STATUS: &str = "active";

/// User account record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String, // Argon2 PHC string, never exposed in JSON
    pub status: String,
    pub created_at: OffsetDateTime,
}
