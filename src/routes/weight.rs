// SPDX-License-Identifier: MIT

//! Weight log routes: list, create, delete.

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
use crate::models::{authorize, WeightLog};
use crate::routes::MessageResponse;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/weight", get(list_weight_logs).post(create_weight_log))
        .route("/api/weight/{id}", delete(delete_weight_log))
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateWeightRequest {
    pub date: DateTime<Utc>,
    /// Body weight (kg)
    #[validate(range(min = 1.0))]
    pub weight: f64,
    /// Body fat percentage
    #[validate(range(min = 0.0, max = 100.0))]
    pub body_fat: Option<f64>,
}

/// List the user's weight logs, date descending.
async fn list_weight_logs(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<WeightLog>>> {
    let logs = state.db.weight_logs_for_user(user.user_id).await?;
    Ok(Json(logs))
}

/// Log a weigh-in.
async fn create_weight_log(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<CreateWeightRequest>,
) -> Result<(StatusCode, Json<WeightLog>)> {
    payload.validate()?;

    let log = WeightLog {
        id: Uuid::new_v4(),
        user_id: user.user_id,
        date: payload.date,
        weight: payload.weight,
        body_fat: payload.body_fat,
        created_at: Utc::now(),
    };

    state.db.insert_weight_log(&log).await?;

    Ok((StatusCode::CREATED, Json(log)))
}

/// Delete a weight log after the ownership check.
async fn delete_weight_log(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>> {
    let log = state.db.get_weight_log(id).await?;
    authorize(log, user.user_id, "Weight log")?;

    state.db.delete_weight_log(id).await?;

    Ok(Json(MessageResponse {
        message: "Weight log deleted successfully".to_string(),
    }))
}
