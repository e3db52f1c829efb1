use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/habits", get(handlers::list_habits).post(handlers::create_habit))
        .route("/api/habits/rename", post(handlers::rename_habit))
        .route("/api/habits/delete", post(handlers::delete_habit))
        .route("/api/habits/log", post(handlers::log_day))
        .route("/api/habits/unlog", post(handlers::unlog_day))
        .route("/api/habits/reorder", post(handlers::reorder))
        .with_state(state)
}
