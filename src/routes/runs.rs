// SPDX-License-Identifier: MIT

//! Run routes: list, create, delete.

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
use crate::models::{authorize, run::compute_pace, Run};
use crate::routes::MessageResponse;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/runs", get(list_runs).post(create_run))
        .route("/api/runs/{id}", delete(delete_run))
}

#[derive(Deserialize, Validate)]
pub struct CreateRunRequest {
    pub date: DateTime<Utc>,
    /// Distance (km)
    #[validate(range(min = 0.1))]
    pub distance: f64,
    /// Duration (min)
    #[validate(range(min = 1))]
    pub duration: i64,
}

/// List the user's runs, date descending.
async fn list_runs(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<Run>>> {
    let runs = state.db.runs_for_user(user.user_id).await?;
    Ok(Json(runs))
}

/// Log a run. Pace is derived here, once, and stored.
async fn create_run(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<CreateRunRequest>,
) -> Result<(StatusCode, Json<Run>)> {
    payload.validate()?;

    let run = Run {
        id: Uuid::new_v4(),
        user_id: user.user_id,
        date: payload.date,
        distance: payload.distance,
        duration: payload.duration,
        pace: compute_pace(payload.distance, payload.duration),
        created_at: Utc::now(),
    };

    state.db.insert_run(&run).await?;

    Ok((StatusCode::CREATED, Json(run)))
}

/// Delete a run after the ownership check.
async fn delete_run(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>> {
    let run = state.db.get_run(id).await?;
    authorize(run, user.user_id, "Run")?;

    state.db.delete_run(id).await?;

    Ok(Json(MessageResponse {
        message: "Run deleted successfully".to_string(),
    }))
}
