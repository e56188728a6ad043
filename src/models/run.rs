// SPDX-License-Identifier: MIT

//! Run model and pace derivation.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::Owned;

/// A logged run.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Run {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: DateTime<Utc>,
    /// Distance (km)
    pub distance: f64,
    /// Duration (min)
    pub duration: i64,
    /// Pace (min/km), derived at creation and stored
    pub pace: f64,
    pub created_at: DateTime<Utc>,
}

impl Owned for Run {
    fn owner_id(&self) -> Uuid {
        self.user_id
    }
}

/// Pace (min/km) from duration (min) and distance (km).
///
/// Computed once at creation time, never re-derived on read.
/// Zero distance yields a pace of 0 rather than a division error.
pub fn compute_pace(distance: f64, duration: i64) -> f64 {
    if distance > 0.0 {
        duration as f64 / distance
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pace_from_distance_and_duration() {
        assert_eq!(compute_pace(10.0, 50), 5.0);
        assert_eq!(compute_pace(5.0, 30), 6.0);
    }

    #[test]
    fn test_pace_zero_distance_is_zero() {
        assert_eq!(compute_pace(0.0, 50), 0.0);
    }

    #[test]
    fn test_pace_fractional_distance() {
        let pace = compute_pace(3.2, 16);
        assert!((pace - 5.0).abs() < 1e-9);
    }
}
