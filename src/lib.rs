// SPDX-License-Identifier: MIT

//! Fitlog: a personal fitness-tracking API.
//!
//! This crate provides the backend for logging workouts, runs, sleep, and
//! weight, and serving a dashboard summary aggregated across all four
//! record types. Every query is scoped to the authenticated user.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;

use config::Config;
use db::Db;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: Db,
}
