//! Page handlers

use crate::{
    pages::{self, MessagePage, log::LogFormInput},
    state::AppState,
};
use axum::{
    Form,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use std::sync::Arc;

/// Query string of the plan page
#[derive(Debug, Default, Deserialize)]
pub struct PlanQuery {
    /// Requested day, kept raw so junk falls back to day 1
    #[serde(default)]
    pub day: Option<String>,
}

impl PlanQuery {
    /// Requested day if it parses as a number
    #[must_use]
    pub fn day(&self) -> Option<u32> {
        self.day.as_deref().and_then(|d| d.trim().parse().ok())
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Instrument list
pub async fn home(State(state): State<Arc<AppState>>) -> Response {
    pages::home::load(&state.api_client).await.into_response()
}

/// Instrument dashboard
pub async fn instrument_dashboard(
    State(state): State<Arc<AppState>>,
    Path(instrument): Path<String>,
) -> Response {
    pages::instrument::load(&state.api_client, &instrument)
        .await
        .into_response()
}

/// Practice plan, optionally on `?day=n`
pub async fn plan_page(
    State(state): State<Arc<AppState>>,
    Path(instrument): Path<String>,
    Query(query): Query<PlanQuery>,
) -> Response {
    pages::plan::load(&state.api_client, &instrument, query.day())
        .await
        .into_response()
}

/// Log entry form; query fields prefill it when the day changes
pub async fn log_page(
    State(state): State<Arc<AppState>>,
    Path(instrument): Path<String>,
    Query(input): Query<LogFormInput>,
) -> Response {
    pages::log::load(&state.api_client, &instrument, input, today())
        .await
        .into_response()
}

/// Log form submission
pub async fn submit_log(
    State(state): State<Arc<AppState>>,
    Path(instrument): Path<String>,
    Form(input): Form<LogFormInput>,
) -> Response {
    pages::log::submit(&state.api_client, &instrument, input, today())
        .await
        .into_response()
}

/// Practice history
pub async fn history_page(
    State(state): State<Arc<AppState>>,
    Path(instrument): Path<String>,
) -> Response {
    pages::history::load(&state.api_client, &instrument)
        .await
        .into_response()
}

/// Fallback for unknown routes
pub async fn not_found() -> Response {
    let page = MessagePage::unknown_route();
    pages::render(&page, page.status)
}
