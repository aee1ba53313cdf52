use sqlx::PgPool;

use crate::error::RepoError;
use crate::respondents::repo_types::Respondent;

impl Respondent {
    /// Insert a sign-up. The repository does not dedupe; the unique constraint
    /// on `email` turns a duplicate into [`RepoError::Conflict`].
    pub async fn create(db: &PgPool, email: &str) -> Result<Respondent, RepoError> {
        let respondent = sqlx::query_as::<_, Respondent>(
            r#"
            INSERT INTO respondents (email)
            VALUES ($1)
            RETURNING id, email, created_at
            "#,
        )
        .bind(email)
        .fetch_one(db)
        .await?;
        Ok(respondent)
    }

    pub async fn get_by_id(db: &PgPool, id: i64) -> Result<Option<Respondent>, RepoError> {
        let respondent = sqlx::query_as::<_, Respondent>(
            r#"
            SELECT id, email, created_at
            FROM respondents
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(respondent)
    }

    /// Find a sign-up by email; the sign-up flow's duplicate pre-check.
    pub async fn find_by_email(db: &PgPool, email: &str) -> Result<Option<Respondent>, RepoError> {
        let respondent = sqlx::query_as::<_, Respondent>(
            r#"
            SELECT id, email, created_at
            FROM respondents
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await?;
        Ok(respondent)
    }

    /// All sign-ups, newest first. Id breaks ties for rows created in the
    /// same instant.
    pub async fn list_all(db: &PgPool) -> Result<Vec<Respondent>, RepoError> {
        let rows = sqlx::query_as::<_, Respondent>(
            r#"
            SELECT id, email, created_at
            FROM respondents
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    /// Physically delete a sign-up, returning the removed record.
    pub async fn delete(db: &PgPool, id: i64) -> Result<Respondent, RepoError> {
        let respondent = sqlx::query_as::<_, Respondent>(
            r#"
            DELETE FROM respondents
            WHERE id = $1
            RETURNING id, email, created_at
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        respondent.ok_or(RepoError::NotFound)
    }
}
