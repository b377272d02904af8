use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/:deployment/list", get(handlers::list))
        .route("/api/:deployment/add", post(handlers::add))
        .route("/api/:deployment/remove/:id", get(handlers::remove))
        .route("/api/:deployment/item/:id", get(handlers::get_item))
        .route("/api/:deployment/update", post(handlers::update))
        .with_state(state)
}
