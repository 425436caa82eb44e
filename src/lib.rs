#![allow(dead_code)]

use std::sync::Arc;

use axum::{routing::get, Router};
use sqlx::SqlitePool;

use crate::app::env::Envy;

pub mod app;
pub mod stats;
pub mod transactions;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub envy: Arc<Envy>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(app::controller::get_root))
        // transactions
        .route("/initializeS", get(transactions::controller::initialize))
        .route(
            "/alltransactions",
            get(transactions::controller::get_transactions),
        )
        // stats
        .route("/statistic", get(stats::controller::get_statistics))
        .route("/barchart", get(stats::controller::get_bar_chart))
        .route("/piechart", get(stats::controller::get_pie_chart))
        .route("/combinedData", get(stats::controller::get_combined_data))
        .with_state(state)
}
