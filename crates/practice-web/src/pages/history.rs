//! Practice history page: analytics and recent logs

use askama::Template;
use practice_core::{AnalyticsSummary, PracticeLog, PracticeTemplate, Result, resolve};

use super::{
    MessagePage, NO_ACTIVE_TEMPLATE, PageState, dashboard_href, page_state, resolve_template,
};
use crate::{
    api_client::ApiClient,
    components::{AnalyticsSummaryCard, HistoryCard},
};

/// Analytics and the most recent logs of a template
#[derive(Debug, Clone, Template)]
#[template(path = "history.html")]
pub struct HistoryView {
    /// Dashboard path of the instrument, percent-encoded
    pub base_href: String,
    /// Template name for the header
    pub template_name: String,
    /// Summary statistics
    pub summary: AnalyticsSummaryCard,
    /// One card per log, newest first
    pub cards: Vec<HistoryCard>,
}

impl HistoryView {
    /// Build the view, pairing each log with its rotation day title
    #[must_use]
    pub fn new(
        instrument: &str,
        template: &PracticeTemplate,
        logs: &[PracticeLog],
        analytics: &AnalyticsSummary,
    ) -> Self {
        let cards = logs
            .iter()
            .map(|log| {
                let title = resolve::find_day(template, log.day_number).map(|d| d.title.as_str());
                HistoryCard::new(log, title)
            })
            .collect();

        Self {
            base_href: dashboard_href(instrument),
            template_name: template.name.clone(),
            summary: AnalyticsSummaryCard::new(analytics),
            cards,
        }
    }

    /// Whether there is nothing logged yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

async fn fetch(client: &ApiClient, instrument: &str) -> Result<HistoryView> {
    let resolved = resolve_template(client, instrument).await?;
    let id = resolved.template.id;
    let (template, logs, analytics) = tokio::try_join!(
        client.get_template(id),
        client.list_logs(id),
        client.get_analytics(id),
    )?;

    Ok(HistoryView::new(instrument, &template, &logs, &analytics))
}

/// Load the history of an instrument's active template
pub async fn load(client: &ApiClient, instrument: &str) -> PageState<HistoryView> {
    page_state(fetch(client, instrument).await, instrument, || {
        MessagePage::not_found(NO_ACTIVE_TEMPLATE).back_to_dashboard(instrument)
    })
}
