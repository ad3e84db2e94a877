//! Instrument dashboard: entry point to plan, log and history

use askama::Template;
use practice_core::{Error, Resolution, Result, resolve};

use super::{MessagePage, PageState, dashboard_href, page_state};
use crate::api_client::ApiClient;

/// Message shown when no instrument matches the URL
pub const INSTRUMENT_NOT_FOUND: &str = "Instrument not found";

/// Dashboard for one instrument
#[derive(Debug, Clone, Template)]
#[template(path = "instrument.html")]
pub struct DashboardView {
    /// Dashboard path of the instrument, percent-encoded
    pub base_href: String,
    /// Instrument display name
    pub name: String,
    /// Active template name, empty when there is none
    pub template_name: String,
}

async fn fetch(client: &ApiClient, slug: &str) -> Result<DashboardView> {
    let (instruments, templates) =
        tokio::try_join!(client.list_instruments(), client.list_templates())?;

    let view = |name: &str, template_name: &str| DashboardView {
        base_href: dashboard_href(slug),
        name: name.to_string(),
        template_name: template_name.to_string(),
    };

    match resolve::resolve_active_template(&instruments, &templates, slug) {
        Resolution::Found {
            instrument,
            template,
        } => Ok(view(&instrument.name, &template.name)),
        Resolution::NoActiveTemplate { instrument } => Ok(view(&instrument.name, "")),
        Resolution::InstrumentNotFound => Err(Error::NotFound {
            resource: format!("instrument '{slug}'"),
        }),
    }
}

/// Load the dashboard for an instrument
pub async fn load(client: &ApiClient, slug: &str) -> PageState<DashboardView> {
    page_state(fetch(client, slug).await, slug, || {
        MessagePage::not_found(INSTRUMENT_NOT_FOUND)
    })
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;

    fn view(template_name: &str) -> DashboardView {
        DashboardView {
            base_href: "/violin".to_string(),
            name: "Violin".to_string(),
            template_name: template_name.to_string(),
        }
    }

    #[test]
    fn test_render_with_template() {
        let html = view("Violin Rotation").render().unwrap();

        assert!(html.contains("Violin Practice Tracker"));
        assert!(html.contains("Violin Rotation"));
        assert!(html.contains("View Practice Plan"));
    }

    #[test]
    fn test_render_without_template() {
        let html = view("").render().unwrap();

        assert!(html.contains("No active template"));
        assert!(html.contains("Log Practice"));
    }
}
