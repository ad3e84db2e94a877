//! Practice Journal web interface
//!
//! Server-rendered pages for following a practice rotation, logging
//! sessions and reviewing history, backed by the practice journal API.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod api_client;
pub mod components;
pub mod handlers;
pub mod middleware;
pub mod pages;
pub mod routes;
pub mod server;
pub mod state;

// Re-export the main functions
pub use api_client::ApiClient;
pub use server::{build_app, build_app_with_client};
pub use state::AppState;
