use axum::{
    extract::{FromRef, Path, State},
    http::StatusCode,
    routing::{delete, get, patch, post},
    Json, Router,
};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{error, info, instrument, warn};

use crate::{
    auth::{
        dto::{AuthResponse, LoginRequest, PublicUser, RegisterRequest, UpdateStatusRequest},
        jwt::{AuthUser, JwtKeys},
        password::hash_password,
        repo_types::User,
    },
    db::AppState,
    error::RepoError,
};

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/me", get(me))
}

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/:id/status", patch(update_status))
        .route("/users/:id", delete(delete_user))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(mut payload): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>, (StatusCode, String)> {
    payload.email = payload.email.trim().to_lowercase();

    if !is_valid_email(&payload.email) {
        warn!(email = %payload.email, "invalid email");
        return Err((StatusCode::BAD_REQUEST, "Invalid email".into()));
    }

    if payload.password.len() < 8 {
        warn!("password too short");
        return Err((StatusCode::BAD_REQUEST, "Password too short".into()));
    }

    // Ensure email is not taken
    if let Ok(Some(_)) = User::find_by_email(&state.db, &payload.email).await {
        warn!(email = %payload.email, "email already registered");
        return Err((StatusCode::CONFLICT, "Email already registered".into()));
    }

    let hash = match hash_password(&payload.password) {
        Ok(h) => h,
        Err(e) => {
            error!(error = %e, "hash_password failed");
            return Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()));
        }
    };

    let user = match User::create(&state.db, &payload.email, &hash, None).await {
        Ok(u) => u,
        // Lost the pre-check race to a concurrent registration
        Err(RepoError::Conflict) => {
            warn!(email = %payload.email, "email already registered");
            return Err((StatusCode::CONFLICT, "Email already registered".into()));
        }
        Err(e) => return Err(e.into_http()),
    };

    let keys = JwtKeys::from_ref(&state);
    let token = keys.sign(user.id).map_err(|e| {
        error!(error = %e, "jwt sign failed");
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?;

    info!(user_id = %user.id, email = %user.email, "user registered");
    Ok(Json(AuthResponse {
        token,
        user: user.into(),
    }))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(mut payload): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, (StatusCode, String)> {
    payload.email = payload.email.trim().to_lowercase();

    if !is_valid_email(&payload.email) {
        warn!(email = %payload.email, "invalid email");
        return Err((StatusCode::BAD_REQUEST, "Invalid email".into()));
    }

    let user = match User::verify_login(&state.db, &payload.email, &payload.password).await {
        Ok(Some(u)) => u,
        // One answer for unknown email and wrong password
        Ok(None) => {
            warn!(email = %payload.email, "login rejected");
            return Err(RepoError::InvalidCredentials.into_http());
        }
        Err(e) => return Err(e.into_http()),
    };

    let keys = JwtKeys::from_ref(&state);
    let token = keys.sign(user.id).map_err(|e| {
        error!(error = %e, "jwt sign failed");
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?;

    info!(user_id = %user.id, email = %user.email, "user logged in");
    Ok(Json(AuthResponse {
        token,
        user: user.into(),
    }))
}

#[instrument(skip(state))]
pub async fn me(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<PublicUser>, (StatusCode, String)> {
    let user = User::get_by_id(&state.db, user_id).await.map_err(|e| match e {
        RepoError::NotFound => {
            warn!(user_id = %user_id, "token subject has no account");
            (StatusCode::UNAUTHORIZED, "User not found".into())
        }
        other => other.into_http(),
    })?;

    Ok(Json(user.into()))
}

#[instrument(skip(state, payload))]
pub async fn update_status(
    State(state): State<AppState>,
    AuthUser(admin_id): AuthUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateStatusRequest>,
) -> Result<Json<PublicUser>, (StatusCode, String)> {
    if payload.status.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "Status must not be empty".into()));
    }

    let user = User::update_status(&state.db, id, payload.status.trim())
        .await
        .map_err(RepoError::into_http)?;

    info!(user_id = %user.id, status = %user.status, by = %admin_id, "user status updated");
    Ok(Json(user.into()))
}

#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    AuthUser(admin_id): AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<PublicUser>, (StatusCode, String)> {
    let user = User::delete(&state.db, id)
        .await
        .map_err(RepoError::into_http)?;

    info!(user_id = %user.id, by = %admin_id, "user deleted");
    Ok(Json(user.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_emails() {
        assert!(is_valid_email("someone@example.com"));
        assert!(is_valid_email("first.last+tag@sub.domain.org"));
    }

    #[test]
    fn rejects_malformed_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("missing@tld"));
        assert!(!is_valid_email("spaces in@example.com"));
        assert!(!is_valid_email("@example.com"));
    }
}
