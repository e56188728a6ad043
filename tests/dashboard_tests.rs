// SPDX-License-Identifier: MIT

//! Dashboard aggregation tests.
//!
//! The summary must stay consistent with the underlying records, and a user
//! with no data gets the zero/null defaults rather than an error.

use axum::http::StatusCode;
use serde_json::json;

mod common;

#[tokio::test]
async fn test_empty_user_gets_zero_defaults() {
    let (app, _) = common::create_test_app().await;
    let token = common::register_user(&app, "Ada", "ada@example.com").await;

    let (status, body) = common::send(&app, "GET", "/api/dashboard/stats", Some(&token), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["counts"]["workouts"], 0);
    assert_eq!(body["counts"]["runs"], 0);
    assert_eq!(body["counts"]["totalRunDistance"].as_f64().unwrap(), 0.0);
    assert_eq!(body["counts"]["avgSleepDuration"].as_f64().unwrap(), 0.0);
    assert_eq!(body["counts"]["avgSleepQuality"].as_f64().unwrap(), 0.0);
    assert!(body["counts"]["currentWeight"].is_null());
    assert_eq!(body["recentWorkouts"], json!([]));
}

#[tokio::test]
async fn test_total_run_distance_sums_all_runs() {
    let (app, _) = common::create_test_app().await;
    let token = common::register_user(&app, "Ada", "ada@example.com").await;

    for (distance, duration) in [(5.0, 25), (3.2, 16)] {
        common::send(
            &app,
            "POST",
            "/api/runs",
            Some(&token),
            Some(json!({"date": "2024-03-01T07:30:00Z", "distance": distance, "duration": duration})),
        )
        .await;
    }

    let (_, body) = common::send(&app, "GET", "/api/dashboard/stats", Some(&token), None).await;

    assert_eq!(body["counts"]["runs"], 2);
    let total = body["counts"]["totalRunDistance"].as_f64().unwrap();
    assert!((total - 8.2).abs() < 1e-9);
}

#[tokio::test]
async fn test_sleep_averages() {
    let (app, _) = common::create_test_app().await;
    let token = common::register_user(&app, "Ada", "ada@example.com").await;

    for (duration, quality) in [(7.0, 4), (9.0, 2)] {
        common::send(
            &app,
            "POST",
            "/api/sleep",
            Some(&token),
            Some(json!({"date": "2024-03-01T08:00:00Z", "duration": duration, "quality": quality})),
        )
        .await;
    }

    let (_, body) = common::send(&app, "GET", "/api/dashboard/stats", Some(&token), None).await;

    assert_eq!(body["counts"]["avgSleepDuration"].as_f64().unwrap(), 8.0);
    assert_eq!(body["counts"]["avgSleepQuality"].as_f64().unwrap(), 3.0);
}

#[tokio::test]
async fn test_current_weight_is_latest_by_date_not_insertion() {
    let (app, _) = common::create_test_app().await;
    let token = common::register_user(&app, "Ada", "ada@example.com").await;

    // Inserted newest-date first; the later insert has an older date
    for (date, weight) in [
        ("2024-03-05T08:00:00Z", 71.8),
        ("2024-03-01T08:00:00Z", 72.6),
    ] {
        common::send(
            &app,
            "POST",
            "/api/weight",
            Some(&token),
            Some(json!({"date": date, "weight": weight})),
        )
        .await;
    }

    let (_, body) = common::send(&app, "GET", "/api/dashboard/stats", Some(&token), None).await;

    assert_eq!(body["counts"]["currentWeight"].as_f64().unwrap(), 71.8);
}

#[tokio::test]
async fn test_recent_workouts_capped_at_five_most_recent() {
    let (app, _) = common::create_test_app().await;
    let token = common::register_user(&app, "Ada", "ada@example.com").await;

    for day in 1..=6 {
        common::send(
            &app,
            "POST",
            "/api/workouts",
            Some(&token),
            Some(json!({
                "date": format!("2024-03-{:02}T18:00:00Z", day),
                "type": format!("Day {}", day),
                "exercises": [{"name": "Squat", "sets": 3, "reps": 5}],
            })),
        )
        .await;
    }

    let (_, body) = common::send(&app, "GET", "/api/dashboard/stats", Some(&token), None).await;

    assert_eq!(body["counts"]["workouts"], 6);

    let recent = body["recentWorkouts"].as_array().unwrap();
    assert_eq!(recent.len(), 5);
    assert_eq!(recent[0]["type"], "Day 6");
    assert_eq!(recent[4]["type"], "Day 2");
    // Exercises ride along on the recent workouts
    assert_eq!(recent[0]["exercises"][0]["name"], "Squat");
}

#[tokio::test]
async fn test_dashboard_is_scoped_to_the_requesting_user() {
    let (app, _) = common::create_test_app().await;
    let ada = common::register_user(&app, "Ada", "ada@example.com").await;
    let eve = common::register_user(&app, "Eve", "eve@example.com").await;

    common::send(
        &app,
        "POST",
        "/api/runs",
        Some(&ada),
        Some(json!({"date": "2024-03-01T07:30:00Z", "distance": 10.0, "duration": 50})),
    )
    .await;

    let (_, body) = common::send(&app, "GET", "/api/dashboard/stats", Some(&eve), None).await;

    assert_eq!(body["counts"]["runs"], 0);
    assert_eq!(body["counts"]["totalRunDistance"].as_f64().unwrap(), 0.0);
}
