// SPDX-License-Identifier: MIT

//! SQLite store with typed operations.
//!
//! Provides high-level operations for:
//! - Users (accounts)
//! - Workouts and their exercises (parent + children, transactional)
//! - Runs, sleep logs, weight logs
//! - Dashboard aggregates (counts, sums, averages, latest-record lookups)
//!
//! All list queries are scoped to one user and ordered by `date` descending;
//! records sharing a date come back in insertion order (`rowid` ascending).

use std::collections::HashMap;
use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{Exercise, Run, SleepLog, User, WeightLog, Workout};

static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// SQLite database handle.
///
/// Cheap to clone; all clones share one connection pool. Opened at process
/// start and passed explicitly through `AppState`.
#[derive(Clone)]
pub struct Db {
    pool: SqlitePool,
}

impl Db {
    /// Open (creating if missing) the database at `url` and run migrations.
    pub async fn new(url: &str) -> Result<Self, AppError> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(|e| AppError::Database(format!("Invalid database URL: {}", e)))?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new().connect_with(options).await?;

        MIGRATOR.run(&pool).await.map_err(|e| {
            AppError::Database(format!("Migration failed: {}", e))
        })?;

        tracing::info!(url, "Connected to SQLite");

        Ok(Self { pool })
    }

    /// Open an in-memory database for tests.
    ///
    /// Pinned to a single pooled connection that never expires, since each
    /// SQLite in-memory connection is its own database.
    pub async fn new_in_memory() -> Result<Self, AppError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|e| AppError::Database(e.to_string()))?
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        MIGRATOR.run(&pool).await.map_err(|e| {
            AppError::Database(format!("Migration failed: {}", e))
        })?;

        Ok(Self { pool })
    }

    // ─── User Operations ─────────────────────────────────────────

    /// Insert a new user. A duplicate email surfaces as a constraint error.
    pub async fn insert_user(&self, user: &User) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO users (id, name, email, password_hash, created_at)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, email, password_hash, created_at FROM users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    // ─── Workout Operations ──────────────────────────────────────

    /// Insert a workout and its exercises in one transaction.
    ///
    /// A failure on any exercise rolls back the parent, so no orphaned
    /// workout is left behind.
    pub async fn insert_workout(&self, workout: &Workout) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            "INSERT INTO workouts (id, user_id, date, workout_type, notes, created_at)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(workout.id)
        .bind(workout.user_id)
        .bind(workout.date)
        .bind(&workout.workout_type)
        .bind(&workout.notes)
        .bind(workout.created_at)
        .execute(&mut *tx)
        .await?;

        for (position, exercise) in workout.exercises.iter().enumerate() {
            sqlx::query(
                "INSERT INTO exercises (id, workout_id, name, sets, reps, weight, duration, position)
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
            )
            .bind(exercise.id)
            .bind(exercise.workout_id)
            .bind(&exercise.name)
            .bind(exercise.sets)
            .bind(exercise.reps)
            .bind(exercise.weight)
            .bind(exercise.duration)
            .bind(position as i64)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    /// Get all workouts for a user with exercises attached, date descending.
    pub async fn workouts_for_user(&self, user_id: Uuid) -> Result<Vec<Workout>, AppError> {
        let workouts = sqlx::query_as::<_, Workout>(
            "SELECT id, user_id, date, workout_type, notes, created_at
             FROM workouts WHERE user_id = ? ORDER BY date DESC, rowid ASC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        self.attach_exercises(workouts).await
    }

    /// Get the `limit` most recent workouts for a user, with exercises.
    pub async fn recent_workouts(
        &self,
        user_id: Uuid,
        limit: i64,
    ) -> Result<Vec<Workout>, AppError> {
        let workouts = sqlx::query_as::<_, Workout>(
            "SELECT id, user_id, date, workout_type, notes, created_at
             FROM workouts WHERE user_id = ? ORDER BY date DESC, rowid ASC LIMIT ?",
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        self.attach_exercises(workouts).await
    }

    /// Get a workout by id (without exercises), for the ownership check.
    pub async fn get_workout(&self, id: Uuid) -> Result<Option<Workout>, AppError> {
        let workout = sqlx::query_as::<_, Workout>(
            "SELECT id, user_id, date, workout_type, notes, created_at
             FROM workouts WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(workout)
    }

    /// Delete a workout and its exercises in one transaction.
    pub async fn delete_workout(&self, id: Uuid) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM exercises WHERE workout_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM workouts WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }

    /// Attach exercises to their parent workouts, preserving both the
    /// workout order and each workout's exercise insertion order.
    async fn attach_exercises(
        &self,
        mut workouts: Vec<Workout>,
    ) -> Result<Vec<Workout>, AppError> {
        if workouts.is_empty() {
            return Ok(workouts);
        }

        let placeholders = vec!["?"; workouts.len()].join(", ");
        let sql = format!(
            "SELECT id, workout_id, name, sets, reps, weight, duration
             FROM exercises WHERE workout_id IN ({}) ORDER BY position ASC",
            placeholders
        );

        let mut query = sqlx::query_as::<_, Exercise>(&sql);
        for workout in &workouts {
            query = query.bind(workout.id);
        }
        let exercises = query.fetch_all(&self.pool).await?;

        let mut by_workout: HashMap<Uuid, Vec<Exercise>> = HashMap::new();
        for exercise in exercises {
            by_workout
                .entry(exercise.workout_id)
                .or_default()
                .push(exercise);
        }
        for workout in &mut workouts {
            workout.exercises = by_workout.remove(&workout.id).unwrap_or_default();
        }

        Ok(workouts)
    }

    // ─── Run Operations ──────────────────────────────────────────

    pub async fn insert_run(&self, run: &Run) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO runs (id, user_id, date, distance, duration, pace, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(run.id)
        .bind(run.user_id)
        .bind(run.date)
        .bind(run.distance)
        .bind(run.duration)
        .bind(run.pace)
        .bind(run.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn runs_for_user(&self, user_id: Uuid) -> Result<Vec<Run>, AppError> {
        let runs = sqlx::query_as::<_, Run>(
            "SELECT id, user_id, date, distance, duration, pace, created_at
             FROM runs WHERE user_id = ? ORDER BY date DESC, rowid ASC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(runs)
    }

    pub async fn get_run(&self, id: Uuid) -> Result<Option<Run>, AppError> {
        let run = sqlx::query_as::<_, Run>(
            "SELECT id, user_id, date, distance, duration, pace, created_at
             FROM runs WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(run)
    }

    pub async fn delete_run(&self, id: Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM runs WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    // ─── Sleep Operations ────────────────────────────────────────

    pub async fn insert_sleep_log(&self, log: &SleepLog) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO sleep_logs (id, user_id, date, duration, quality, bed_time, wake_time, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(log.id)
        .bind(log.user_id)
        .bind(log.date)
        .bind(log.duration)
        .bind(log.quality)
        .bind(log.bed_time)
        .bind(log.wake_time)
        .bind(log.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn sleep_logs_for_user(&self, user_id: Uuid) -> Result<Vec<SleepLog>, AppError> {
        let logs = sqlx::query_as::<_, SleepLog>(
            "SELECT id, user_id, date, duration, quality, bed_time, wake_time, created_at
             FROM sleep_logs WHERE user_id = ? ORDER BY date DESC, rowid ASC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(logs)
    }

    pub async fn get_sleep_log(&self, id: Uuid) -> Result<Option<SleepLog>, AppError> {
        let log = sqlx::query_as::<_, SleepLog>(
            "SELECT id, user_id, date, duration, quality, bed_time, wake_time, created_at
             FROM sleep_logs WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(log)
    }

    pub async fn delete_sleep_log(&self, id: Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM sleep_logs WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    // ─── Weight Operations ───────────────────────────────────────

    pub async fn insert_weight_log(&self, log: &WeightLog) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO weight_logs (id, user_id, date, weight, body_fat, created_at)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(log.id)
        .bind(log.user_id)
        .bind(log.date)
        .bind(log.weight)
        .bind(log.body_fat)
        .bind(log.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn weight_logs_for_user(&self, user_id: Uuid) -> Result<Vec<WeightLog>, AppError> {
        let logs = sqlx::query_as::<_, WeightLog>(
            "SELECT id, user_id, date, weight, body_fat, created_at
             FROM weight_logs WHERE user_id = ? ORDER BY date DESC, rowid ASC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(logs)
    }

    pub async fn get_weight_log(&self, id: Uuid) -> Result<Option<WeightLog>, AppError> {
        let log = sqlx::query_as::<_, WeightLog>(
            "SELECT id, user_id, date, weight, body_fat, created_at
             FROM weight_logs WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(log)
    }

    pub async fn delete_weight_log(&self, id: Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM weight_logs WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    // ─── Dashboard Aggregates ────────────────────────────────────

    pub async fn count_workouts(&self, user_id: Uuid) -> Result<i64, AppError> {
        let count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM workouts WHERE user_id = ?")
                .bind(user_id)
                .fetch_one(&self.pool)
                .await?;
        Ok(count)
    }

    pub async fn count_runs(&self, user_id: Uuid) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM runs WHERE user_id = ?")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Sum of run distance for a user; 0 when there are no runs.
    pub async fn total_run_distance(&self, user_id: Uuid) -> Result<f64, AppError> {
        let total = sqlx::query_scalar::<_, f64>(
            "SELECT COALESCE(SUM(distance), 0.0) FROM runs WHERE user_id = ?",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(total)
    }

    /// Average sleep duration and quality for a user; (0, 0) when empty.
    pub async fn sleep_averages(&self, user_id: Uuid) -> Result<(f64, f64), AppError> {
        let averages = sqlx::query_as::<_, (f64, f64)>(
            "SELECT COALESCE(AVG(duration), 0.0), COALESCE(AVG(quality), 0.0)
             FROM sleep_logs WHERE user_id = ?",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(averages)
    }

    /// The weight log with the most recent date, if any.
    pub async fn latest_weight_log(&self, user_id: Uuid) -> Result<Option<WeightLog>, AppError> {
        let log = sqlx::query_as::<_, WeightLog>(
            "SELECT id, user_id, date, weight, body_fat, created_at
             FROM weight_logs WHERE user_id = ? ORDER BY date DESC, rowid ASC LIMIT 1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(log)
    }
}
