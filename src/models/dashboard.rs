// SPDX-License-Identifier: MIT

//! Dashboard summary models.

use serde::Serialize;

use crate::models::Workout;

/// Aggregate counters for the dashboard header cards.
///
/// Fields with no underlying data default to 0, except `current_weight`
/// which is null until the first weigh-in.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardCounts {
    pub workouts: i64,
    pub runs: i64,
    pub total_run_distance: f64,
    pub avg_sleep_duration: f64,
    pub avg_sleep_quality: f64,
    pub current_weight: Option<f64>,
}

/// Response for `GET /api/dashboard/stats`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub counts: DashboardCounts,
    /// The 5 most recent workouts, date descending
    pub recent_workouts: Vec<Workout>,
}
