// SPDX-License-Identifier: MIT

//! Workout and exercise models.
//!
//! Exercises have no independent lifecycle: they are created and deleted
//! atomically with their parent workout.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::Owned;

/// A logged workout session with its ordered exercises.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: DateTime<Utc>,
    /// Workout category, e.g. "Push", "Legs"
    #[serde(rename = "type")]
    pub workout_type: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Attached by the store, not a column on the workouts table.
    #[sqlx(skip)]
    pub exercises: Vec<Exercise>,
}

/// One exercise within a workout, in insertion order.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: Uuid,
    pub workout_id: Uuid,
    pub name: String,
    pub sets: i64,
    pub reps: i64,
    /// Weight used (kg), for weighted movements
    pub weight: Option<f64>,
    /// Duration (min), for timed movements
    pub duration: Option<i64>,
}

impl Owned for Workout {
    fn owner_id(&self) -> Uuid {
        self.user_id
    }
}
