use crate::db::AppState;
use axum::Router;

mod dto;
pub mod handlers;
pub mod jwt;
pub mod password;
mod repo;
pub mod repo_types;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(handlers::auth_routes())
        .merge(handlers::user_routes())
}
