use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::Json;

use collector_application::dtos::PollStatusView;
use collector_application::queries::status_queries;
use collector_application::AppState;
use collector_domain::SensorReading;

use crate::error::HttpError;
use crate::middleware::authorize;

#[derive(serde::Deserialize)]
pub struct ReadingsQuery {
    pub since: Option<String>,
    pub limit: Option<usize>,
}

pub async fn get_status(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<PollStatusView>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let status = status_queries::get_poll_status(&state).await;
    Ok(Json(PollStatusView::from(status)))
}

pub async fn list_readings(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<ReadingsQuery>,
) -> Result<Json<Vec<SensorReading>>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let limit = query.limit.unwrap_or(50).clamp(1, 500);
    let readings =
        status_queries::recent_readings(&state, query.since.as_deref(), limit).await?;
    Ok(Json(readings))
}
