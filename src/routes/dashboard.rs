// SPDX-License-Identifier: MIT

//! Dashboard aggregation route.

use axum::{extract::State, routing::get, Extension, Json, Router};
use std::sync::Arc;

use crate::error::Result;
use crate::middleware::auth::AuthUser;
use crate::models::{DashboardCounts, DashboardStats};
use crate::AppState;

const RECENT_WORKOUT_LIMIT: i64 = 5;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/dashboard/stats", get(get_dashboard_stats))
}

/// Compose the dashboard summary from six independent reads.
///
/// The reads have no ordering dependency, so they run concurrently; a
/// failure in any one fails the whole request. Users with no data get the
/// zero/null defaults, never an error.
async fn get_dashboard_stats(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<DashboardStats>> {
    let db = &state.db;

    let (workouts, runs, total_run_distance, sleep_averages, latest_weight, recent_workouts) =
        tokio::try_join!(
            db.count_workouts(user.user_id),
            db.count_runs(user.user_id),
            db.total_run_distance(user.user_id),
            db.sleep_averages(user.user_id),
            db.latest_weight_log(user.user_id),
            db.recent_workouts(user.user_id, RECENT_WORKOUT_LIMIT),
        )?;

    let (avg_sleep_duration, avg_sleep_quality) = sleep_averages;

    Ok(Json(DashboardStats {
        counts: DashboardCounts {
            workouts,
            runs,
            total_run_distance,
            avg_sleep_duration,
            avg_sleep_quality,
            current_weight: latest_weight.map(|log| log.weight),
        },
        recent_workouts,
    }))
}
