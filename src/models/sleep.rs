//! Sleep log model.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::Owned;

/// One night of sleep.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SleepLog {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: DateTime<Utc>,
    /// Duration (hrs)
    pub duration: f64,
    /// Subjective quality, 1 (worst) to 5 (best)
    pub quality: i64,
    pub bed_time: Option<DateTime<Utc>>,
    pub wake_time: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Owned for SleepLog {
    fn owner_id(&self) -> Uuid {
        self.user_id
    }
}
