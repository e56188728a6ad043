// SPDX-License-Identifier: MIT

//! Data models for the application.

pub mod dashboard;
pub mod run;
pub mod sleep;
pub mod user;
pub mod weight;
pub mod workout;

pub use dashboard::{DashboardCounts, DashboardStats};
pub use run::Run;
pub use sleep::SleepLog;
pub use user::User;
pub use weight::WeightLog;
pub use workout::{Exercise, Workout};

use crate::error::AppError;
use uuid::Uuid;

/// A record owned by exactly one user.
pub trait Owned {
    fn owner_id(&self) -> Uuid;
}

/// Ownership guard, applied before every delete.
///
/// An absent record is a 404; a record owned by someone else is a 403.
/// Absence is checked first so probing a nonexistent id never yields 403.
pub fn authorize<T: Owned>(
    record: Option<T>,
    requester_id: Uuid,
    resource: &str,
) -> Result<T, AppError> {
    let record = record.ok_or_else(|| AppError::NotFound(format!("{} not found", resource)))?;
    if record.owner_id() != requester_id {
        return Err(AppError::Forbidden(format!(
            "{} belongs to another user",
            resource
        )));
    }
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Row {
        user_id: Uuid,
    }

    impl Owned for Row {
        fn owner_id(&self) -> Uuid {
            self.user_id
        }
    }

    #[test]
    fn test_authorize_allows_owner() {
        let owner = Uuid::new_v4();
        let record = Row { user_id: owner };

        assert!(authorize(Some(record), owner, "Run").is_ok());
    }

    #[test]
    fn test_authorize_rejects_other_user() {
        let record = Row {
            user_id: Uuid::new_v4(),
        };

        let err = authorize(Some(record), Uuid::new_v4(), "Run").unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
    }

    #[test]
    fn test_authorize_missing_record_is_not_found() {
        // 404 wins over 403 when the record does not exist at all
        let err = authorize(None::<Row>, Uuid::new_v4(), "Run").unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
