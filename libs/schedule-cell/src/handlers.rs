use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{json, Value};

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::{ScheduleGrid, StepDirection, ViewMode};
use crate::services::calendar;
use crate::services::schedule::ScheduleService;

#[derive(Debug, Deserialize)]
pub struct GridQuery {
    pub date: Option<NaiveDate>,
    pub view: Option<ViewMode>,
}

#[derive(Debug, Deserialize)]
pub struct NavigateQuery {
    pub date: NaiveDate,
    pub view: Option<ViewMode>,
    pub direction: StepDirection,
}

#[axum::debug_handler]
pub async fn get_schedule_grid(
    State(state): State<Arc<AppConfig>>,
    Query(query): Query<GridQuery>,
) -> Result<Json<ScheduleGrid>, AppError> {
    let service = ScheduleService::new(&state);

    let grid = service
        .fetch_grid(query.date, query.view.unwrap_or(ViewMode::Day))
        .await?;

    Ok(Json(grid))
}

/// Step the anchor date backwards or forwards: one day in day view, one week
/// in week view. Pure date arithmetic; nothing is fetched.
#[axum::debug_handler]
pub async fn navigate_anchor(
    Query(query): Query<NavigateQuery>,
) -> Result<Json<Value>, AppError> {
    let mode = query.view.unwrap_or(ViewMode::Day);
    let anchor = calendar::step_anchor(query.date, mode, query.direction);

    Ok(Json(json!({ "date": anchor.to_string() })))
}

/// Today's civil date at the practice, for initializing the date picker.
#[axum::debug_handler]
pub async fn get_today(
    State(state): State<Arc<AppConfig>>,
) -> Result<Json<Value>, AppError> {
    let service = ScheduleService::new(&state);

    Ok(Json(json!({ "date": service.clock().today().to_string() })))
}
