// SPDX-License-Identifier: MIT

//! Sleep log routes: list, create, delete.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::error::Result;
use crate::middleware::auth::AuthUser;
use crate::models::{authorize, SleepLog};
use crate::routes::MessageResponse;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/sleep", get(list_sleep_logs).post(create_sleep_log))
        .route("/api/sleep/{id}", delete(delete_sleep_log))
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSleepRequest {
    pub date: DateTime<Utc>,
    /// Duration (hrs)
    #[validate(range(min = 1.0))]
    pub duration: f64,
    /// Quality, 1 to 5
    #[validate(range(min = 1, max = 5))]
    pub quality: i64,
    pub bed_time: Option<DateTime<Utc>>,
    pub wake_time: Option<DateTime<Utc>>,
}

/// List the user's sleep logs, date descending.
async fn list_sleep_logs(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<SleepLog>>> {
    let logs = state.db.sleep_logs_for_user(user.user_id).await?;
    Ok(Json(logs))
}

/// Log a night of sleep.
async fn create_sleep_log(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<CreateSleepRequest>,
) -> Result<(StatusCode, Json<SleepLog>)> {
    payload.validate()?;

    let log = SleepLog {
        id: Uuid::new_v4(),
        user_id: user.user_id,
        date: payload.date,
        duration: payload.duration,
        quality: payload.quality,
        bed_time: payload.bed_time,
        wake_time: payload.wake_time,
        created_at: Utc::now(),
    };

    state.db.insert_sleep_log(&log).await?;

    Ok((StatusCode::CREATED, Json(log)))
}

/// Delete a sleep log after the ownership check.
async fn delete_sleep_log(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>> {
    let log = state.db.get_sleep_log(id).await?;
    authorize(log, user.user_id, "Sleep log")?;

    state.db.delete_sleep_log(id).await?;

    Ok(Json(MessageResponse {
        message: "Sleep log deleted successfully".to_string(),
    }))
}
