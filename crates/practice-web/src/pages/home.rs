//! Start page: pick an instrument

use askama::Template;
use practice_core::Instrument;
use tracing::error;

use super::{MessagePage, PageState, dashboard_href};
use crate::api_client::ApiClient;

/// Link to an instrument dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstrumentLink {
    /// Display name
    pub name: String,
    /// Dashboard path, the lowercased and percent-encoded name
    pub href: String,
    /// Description, empty when absent
    pub description: String,
}

impl From<&Instrument> for InstrumentLink {
    fn from(instrument: &Instrument) -> Self {
        Self {
            name: instrument.name.clone(),
            href: dashboard_href(&instrument.name.to_lowercase()),
            description: instrument.description.clone().unwrap_or_default(),
        }
    }
}

/// The instrument list
#[derive(Debug, Clone, Template)]
#[template(path = "home.html")]
pub struct HomeView {
    /// One link per instrument, in backend order
    pub instruments: Vec<InstrumentLink>,
}

impl HomeView {
    /// Build the list from backend instruments
    #[must_use]
    pub fn new(instruments: &[Instrument]) -> Self {
        Self {
            instruments: instruments.iter().map(InstrumentLink::from).collect(),
        }
    }
}

/// Load the instrument list
pub async fn load(client: &ApiClient) -> PageState<HomeView> {
    match client.list_instruments().await {
        Ok(instruments) => PageState::Ready(HomeView::new(&instruments)),
        Err(e) => {
            error!("Failed to load instruments: {e}");
            PageState::Message(MessagePage::backend_error(format!(
                "Error loading instruments: {e}"
            )))
        }
    }
}
