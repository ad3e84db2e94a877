//! Route definitions for the web interface

use crate::{
    handlers::{health, pages},
    state::AppState,
};
use axum::{Router, routing::get};
use std::sync::Arc;

/// Build the complete web application router
pub fn build_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Page routes
        .route("/", get(pages::home))
        .route("/:instrument", get(pages::instrument_dashboard))
        .route("/:instrument/plan", get(pages::plan_page))
        .route(
            "/:instrument/log",
            get(pages::log_page).post(pages::submit_log),
        )
        .route("/:instrument/history", get(pages::history_page))
        // Health check
        .route("/health", get(health::health_check))
        .fallback(pages::not_found)
}
