use collector_domain::utils::parse_timestamp_to_millis;
use collector_domain::{PollStatus, SensorReading};

use crate::{AppError, AppState};

pub async fn get_poll_status(state: &AppState) -> PollStatus {
    state.poll_status.read().await.clone()
}

/// Recent readings, newest first. `since` accepts RFC3339 text; offset-less
/// text is read as UTC by the parser, and malformed text is a bad request.
pub async fn recent_readings(
    state: &AppState,
    since: Option<&str>,
    limit: usize,
) -> Result<Vec<SensorReading>, AppError> {
    let since_millis = match since {
        Some(text) => Some(
            parse_timestamp_to_millis(text)
                .map_err(|err| AppError::BadRequest(err.to_string()))?,
        ),
        None => None,
    };

    let recent = state.recent_readings.read().await;
    let mut readings: Vec<SensorReading> = recent
        .iter()
        .filter(|reading| since_millis.map_or(true, |cutoff| reading.captured_at >= cutoff))
        .cloned()
        .collect();
    readings.reverse();
    readings.truncate(limit);
    Ok(readings)
}
