use axum::http::StatusCode;
use thiserror::Error;
use tracing::error;

/// Failure modes surfaced by the repository layer. Callers get one of these
/// four kinds; the underlying driver error stays chained on `Store` for logs.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("record not found")]
    NotFound,
    #[error("record already exists")]
    Conflict,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("store operation failed")]
    Store(#[source] sqlx::Error),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => RepoError::NotFound,
            sqlx::Error::Database(db) if db.is_unique_violation() => RepoError::Conflict,
            other => RepoError::Store(other),
        }
    }
}

impl RepoError {
    pub fn status(&self) -> StatusCode {
        match self {
            RepoError::NotFound => StatusCode::NOT_FOUND,
            RepoError::Conflict => StatusCode::CONFLICT,
            RepoError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            RepoError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Rejection tuple for handlers. The client only ever sees the stable
    /// message; the root cause is logged here and not echoed back.
    pub fn into_http(self) -> (StatusCode, String) {
        if let RepoError::Store(src) = &self {
            error!(error = %src, "store operation failed");
        }
        (self.status(), self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_maps_to_not_found() {
        let err = RepoError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, RepoError::NotFound));
    }

    #[test]
    fn other_driver_errors_map_to_store() {
        let err = RepoError::from(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, RepoError::Store(_)));
    }

    #[test]
    fn status_codes() {
        assert_eq!(RepoError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(RepoError::Conflict.status(), StatusCode::CONFLICT);
        assert_eq!(
            RepoError::InvalidCredentials.status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            RepoError::Store(sqlx::Error::PoolTimedOut).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn store_message_does_not_leak_source() {
        let (status, msg) = RepoError::Store(sqlx::Error::PoolTimedOut).into_http();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(msg, "store operation failed");
        assert!(!msg.contains("pool"));
    }
}
