// SPDX-License-Identifier: MIT

//! Workout routes: list, create, delete.

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
use crate::models::{authorize, Exercise, Workout};
use crate::routes::MessageResponse;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/workouts", get(list_workouts).post(create_workout))
        .route("/api/workouts/{id}", delete(delete_workout))
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkoutRequest {
    pub date: DateTime<Utc>,
    #[validate(length(min = 1))]
    #[serde(rename = "type")]
    pub workout_type: String,
    pub notes: Option<String>,
    #[serde(default)]
    #[validate(nested)]
    pub exercises: Vec<ExercisePayload>,
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ExercisePayload {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = 1))]
    pub sets: i64,
    #[validate(range(min = 1))]
    pub reps: i64,
    pub weight: Option<f64>,
    pub duration: Option<i64>,
}

/// List the user's workouts with exercises, date descending.
async fn list_workouts(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<Workout>>> {
    let workouts = state.db.workouts_for_user(user.user_id).await?;
    Ok(Json(workouts))
}

/// Create a workout and its exercises in one transaction.
///
/// The owner is always the authenticated user; the payload cannot name one.
async fn create_workout(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<CreateWorkoutRequest>,
) -> Result<(StatusCode, Json<Workout>)> {
    payload.validate()?;

    let workout_id = Uuid::new_v4();
    let exercises = payload
        .exercises
        .into_iter()
        .map(|ex| Exercise {
            id: Uuid::new_v4(),
            workout_id,
            name: ex.name,
            sets: ex.sets,
            reps: ex.reps,
            weight: ex.weight,
            duration: ex.duration,
        })
        .collect();

    let workout = Workout {
        id: workout_id,
        user_id: user.user_id,
        date: payload.date,
        workout_type: payload.workout_type,
        notes: payload.notes,
        created_at: Utc::now(),
        exercises,
    };

    state.db.insert_workout(&workout).await?;

    tracing::debug!(
        user_id = %user.user_id,
        workout_id = %workout.id,
        exercises = workout.exercises.len(),
        "Workout created"
    );

    Ok((StatusCode::CREATED, Json(workout)))
}

/// Delete a workout (and its exercises) after the ownership check.
async fn delete_workout(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>> {
    let workout = state.db.get_workout(id).await?;
    authorize(workout, user.user_id, "Workout")?;

    state.db.delete_workout(id).await?;

    Ok(Json(MessageResponse {
        message: "Workout deleted successfully".to_string(),
    }))
}
