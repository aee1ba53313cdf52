use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;

/// One sign-up form submission.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Respondent {
    pub id: i64,
    pub email: String,
    pub created_at: OffsetDateTime,
}
