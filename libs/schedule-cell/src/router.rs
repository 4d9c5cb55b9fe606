use std::sync::Arc;

use axum::{
    Router,
    routing::get,
};

use shared_config::AppConfig;

use crate::handlers;

pub fn schedule_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/grid", get(handlers::get_schedule_grid))
        .route("/navigate", get(handlers::navigate_anchor))
        .route("/today", get(handlers::get_today))
        .with_state(state)
}
