//! Page view models, loaders and templates

pub mod history;
pub mod home;
pub mod instrument;
pub mod log;
pub mod not_found;
pub mod plan;

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use practice_core::{Error, Instrument, PracticeTemplate, Resolution, Result, resolve};
use tracing::{debug, error};

use crate::api_client::ApiClient;
pub use not_found::MessagePage;

/// Message shown when an instrument has no usable template
pub const NO_ACTIVE_TEMPLATE: &str = "No active template found";

/// Either a rendered page or a message explaining why it is missing
#[derive(Debug)]
pub enum PageState<T> {
    /// Data was resolved and the page can render
    Ready(T),
    /// Nothing to show: not found (404) or the backend failed (502)
    Message(MessagePage),
}

impl<T: Template> IntoResponse for PageState<T> {
    fn into_response(self) -> Response {
        match self {
            Self::Ready(view) => render(&view, StatusCode::OK),
            Self::Message(page) => render(&page, page.status),
        }
    }
}

/// Render a template into an HTML response with the given status
pub fn render<T: Template>(template: &T, status: StatusCode) -> Response {
    match template.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            error!("Failed to render page: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page").into_response()
        }
    }
}

/// Path of an instrument dashboard, with the segment percent-encoded
#[must_use]
pub fn dashboard_href(instrument: &str) -> String {
    format!("/{}", urlencoding::encode(instrument))
}

/// An instrument together with the summary of its active template
#[derive(Debug, Clone)]
pub struct ResolvedTemplate {
    /// Matched instrument
    pub instrument: Instrument,
    /// Active template summary, without days
    pub template: PracticeTemplate,
}

/// Fetch instruments and templates together and resolve the active template
///
/// # Errors
///
/// Returns [`Error::NotFound`] when the instrument is unknown or has no
/// active template, or the fetch error if either list cannot be loaded.
pub async fn resolve_template(client: &ApiClient, name: &str) -> Result<ResolvedTemplate> {
    let (instruments, templates) =
        tokio::try_join!(client.list_instruments(), client.list_templates())?;

    match resolve::resolve_active_template(&instruments, &templates, name) {
        Resolution::Found {
            instrument,
            template,
        } => Ok(ResolvedTemplate {
            instrument: instrument.clone(),
            template: template.clone(),
        }),
        Resolution::InstrumentNotFound => Err(Error::NotFound {
            resource: format!("instrument '{name}'"),
        }),
        Resolution::NoActiveTemplate { instrument } => Err(Error::NotFound {
            resource: format!("active template for {}", instrument.name),
        }),
    }
}

/// Resolve the active template and fetch its full day tree
///
/// # Errors
///
/// Returns [`Error::NotFound`] when nothing resolves, or the first failing
/// backend call.
pub async fn load_active_template(client: &ApiClient, name: &str) -> Result<PracticeTemplate> {
    let resolved = resolve_template(client, name).await?;
    client.get_template(resolved.template.id).await
}

/// Collapse a load result into a page state
///
/// Missing records render `not_found` with 404; any other failure renders
/// the backend error page with 502.
pub fn page_state<T>(
    loaded: Result<T>,
    instrument: &str,
    not_found: impl FnOnce() -> MessagePage,
) -> PageState<T> {
    match loaded {
        Ok(view) => PageState::Ready(view),
        Err(e) if e.is_not_found() => {
            debug!(instrument, "Nothing to show: {e}");
            PageState::Message(not_found())
        }
        Err(e) => {
            error!(instrument, "Failed to load page data: {e}");
            PageState::Message(MessagePage::backend_error(format!(
                "Error loading data: {e}"
            )))
        }
    }
}
