//! Application state management

use crate::api_client::ApiClient;
use practice_core::Config;

/// Application state holding configuration and the backend client
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Config,
    /// API client for backend communication
    pub api_client: ApiClient,
}

impl AppState {
    /// Create state with a client built from the backend configuration
    #[must_use]
    pub fn new(config: Config) -> Self {
        let api_client = ApiClient::from_config(&config.backend);
        Self::with_client(config, api_client)
    }

    /// Create state around an existing client
    #[must_use]
    pub const fn with_client(config: Config, api_client: ApiClient) -> Self {
        Self { config, api_client }
    }
}
