use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::{handlers::is_valid_email, jwt::AuthUser},
    db::AppState,
    error::RepoError,
    respondents::{
        dto::{RespondentItem, SignupRequest, SignupResponse},
        repo_types::Respondent,
    },
};

pub fn public_routes() -> Router<AppState> {
    Router::new().route("/signup", post(sign_up))
}

pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/respondents", get(list_respondents))
        .route("/respondents/:id", get(get_respondent).delete(delete_respondent))
}

#[instrument(skip(state, payload))]
pub async fn sign_up(
    State(state): State<AppState>,
    Json(mut payload): Json<SignupRequest>,
) -> Result<(StatusCode, Json<SignupResponse>), (StatusCode, String)> {
    payload.email = payload.email.trim().to_lowercase();

    if !is_valid_email(&payload.email) {
        warn!(email = %payload.email, "invalid sign-up email");
        return Err((
            StatusCode::BAD_REQUEST,
            "Please enter a valid email address".into(),
        ));
    }

    // Pre-check keeps the common repeat submission off the insert path; the
    // unique constraint catches whatever slips through concurrently.
    if let Some(existing) = Respondent::find_by_email(&state.db, &payload.email)
        .await
        .map_err(RepoError::into_http)?
    {
        info!(respondent_id = %existing.id, "repeat sign-up");
        return Ok((
            StatusCode::OK,
            Json(SignupResponse {
                message: "You're already signed up!".into(),
            }),
        ));
    }

    match Respondent::create(&state.db, &payload.email).await {
        Ok(respondent) => {
            info!(respondent_id = %respondent.id, "sign-up recorded");
            Ok((
                StatusCode::CREATED,
                Json(SignupResponse {
                    message: "Thank you for signing up!".into(),
                }),
            ))
        }
        // A concurrent submission won the insert between the check and here
        Err(RepoError::Conflict) => Ok((
            StatusCode::OK,
            Json(SignupResponse {
                message: "You're already signed up!".into(),
            }),
        )),
        Err(e) => Err(e.into_http()),
    }
}

#[instrument(skip(state))]
pub async fn list_respondents(
    State(state): State<AppState>,
    AuthUser(_admin_id): AuthUser,
) -> Result<Json<Vec<RespondentItem>>, (StatusCode, String)> {
    let respondents = Respondent::list_all(&state.db)
        .await
        .map_err(RepoError::into_http)?;
    let items = respondents.into_iter().map(RespondentItem::from).collect();
    Ok(Json(items))
}

#[instrument(skip(state))]
pub async fn get_respondent(
    State(state): State<AppState>,
    AuthUser(_admin_id): AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<RespondentItem>, (StatusCode, String)> {
    let respondent = Respondent::get_by_id(&state.db, id)
        .await
        .map_err(RepoError::into_http)?
        .ok_or((StatusCode::NOT_FOUND, "Respondent not found".to_string()))?;
    Ok(Json(respondent.into()))
}

#[instrument(skip(state))]
pub async fn delete_respondent(
    State(state): State<AppState>,
    AuthUser(admin_id): AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<RespondentItem>, (StatusCode, String)> {
    let respondent = Respondent::delete(&state.db, id)
        .await
        .map_err(RepoError::into_http)?;

    info!(respondent_id = %respondent.id, by = %admin_id, "respondent deleted");
    Ok(Json(respondent.into()))
}
