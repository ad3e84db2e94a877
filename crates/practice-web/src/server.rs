//! Web server setup and configuration

use crate::{
    api_client::ApiClient, middleware::request_logging_middleware, routes::build_routes,
    state::AppState,
};
use axum::{Router, middleware};
use practice_core::Config;
use std::sync::Arc;

/// Build the complete web application with all routes and state
pub fn build_app(config: Config) -> Router {
    let api_client = ApiClient::from_config(&config.backend);
    build_app_with_client(config, api_client)
}

/// Build the application around an existing backend client
pub fn build_app_with_client(config: Config, api_client: ApiClient) -> Router {
    let state = Arc::new(AppState::with_client(config, api_client));

    build_routes()
        .layer(middleware::from_fn(request_logging_middleware))
        .with_state(state)
}
