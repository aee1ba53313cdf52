use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::respondents::repo_types::Respondent;

/// Request body for the public sign-up form.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub email: String,
}

/// Outcome message shown to the person signing up.
#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub message: String,
}

/// One row of the admin listing.
#[derive(Debug, Serialize)]
pub struct RespondentItem {
    pub id: i64,
    pub email: String,
    pub created_at: OffsetDateTime,
}

impl From<Respondent> for RespondentItem {
    fn from(r: Respondent) -> Self {
        Self {
            id: r.id,
            email: r.email,
            created_at: r.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn respondent_item_serialization() {
        let item = RespondentItem {
            id: 3,
            email: "fan@example.com".to_string(),
            created_at: OffsetDateTime::UNIX_EPOCH,
        };

        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("fan@example.com"));
        assert!(json.contains("created_at"));
    }
}
