use lazy_static::lazy_static;
use sqlx::PgPool;
use tracing::warn;

use crate::auth::password::{hash_password, verify_password};
use crate::auth::repo_types::{User, DEFAULT_USER_STATUS};
use crate::error::RepoError;

lazy_static! {
    // Verified against when the email has no account, so the unknown-email and
    // wrong-password branches both cost one Argon2 verification.
    static ref DUMMY_HASH: String =
        hash_password("launchlist-timing-pad").expect("hashing a constant input");
}

impl User {
    /// Insert a new account. `status` falls back to [`DEFAULT_USER_STATUS`].
    /// A duplicate email surfaces as [`RepoError::Conflict`].
    pub async fn create(
        db: &PgPool,
        email: &str,
        password_hash: &str,
        status: Option<&str>,
    ) -> Result<User, RepoError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, password_hash, status)
            VALUES ($1, $2, $3)
            RETURNING id, email, password_hash, status, created_at
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .bind(status.unwrap_or(DEFAULT_USER_STATUS))
        .fetch_one(db)
        .await?;
        Ok(user)
    }

    /// Fetch by id; absence is [`RepoError::NotFound`].
    pub async fn get_by_id(db: &PgPool, id: i64) -> Result<User, RepoError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password_hash, status, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        user.ok_or(RepoError::NotFound)
    }

    /// Find a user by email.
    pub async fn find_by_email(db: &PgPool, email: &str) -> Result<Option<User>, RepoError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password_hash, status, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    /// Replace the lifecycle status, returning the updated record.
    pub async fn update_status(db: &PgPool, id: i64, status: &str) -> Result<User, RepoError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET status = $2
            WHERE id = $1
            RETURNING id, email, password_hash, status, created_at
            "#,
        )
        .bind(id)
        .bind(status)
        .fetch_optional(db)
        .await?;
        user.ok_or(RepoError::NotFound)
    }

    /// Physically delete the account, returning the removed record.
    pub async fn delete(db: &PgPool, id: i64) -> Result<User, RepoError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            DELETE FROM users
            WHERE id = $1
            RETURNING id, email, password_hash, status, created_at
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        user.ok_or(RepoError::NotFound)
    }

    /// Look the email up and check the password against the stored hash.
    /// Unknown email and wrong password both come back as `Ok(None)` so the
    /// caller cannot tell which one happened. A stored hash that fails to
    /// parse counts as a miss rather than an error.
    pub async fn verify_login(
        db: &PgPool,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, RepoError> {
        let Some(user) = User::find_by_email(db, email).await? else {
            let _ = verify_password(password, &DUMMY_HASH);
            return Ok(None);
        };

        match verify_password(password, &user.password_hash) {
            Ok(true) => Ok(Some(user)),
            Ok(false) => Ok(None),
            Err(e) => {
                warn!(error = %e, user_id = %user.id, "stored password hash unreadable");
                Ok(None)
            }
        }
    }
}
