//! Weight log model.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::Owned;

/// One weigh-in.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct WeightLog {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: DateTime<Utc>,
    /// Body weight (kg)
    pub weight: f64,
    /// Body fat percentage
    pub body_fat: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl Owned for WeightLog {
    fn owner_id(&self) -> Uuid {
        self.user_id
    }
}
