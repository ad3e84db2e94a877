//! Practice plan page: the rotation with one day on display

use askama::Template;
use practice_core::{PracticeDay, PracticeTemplate, resolve};

use super::{
    MessagePage, NO_ACTIVE_TEMPLATE, PageState, dashboard_href, load_active_template, page_state,
};
use crate::{
    api_client::ApiClient,
    components::{DaySelector, PracticeBlock},
};

/// Description shown when a template has none
pub const DEFAULT_DESCRIPTION: &str =
    "This rotation ensures systematic coverage of all technical areas.";

/// The full rotation tree with a selected day
#[derive(Debug, Clone, Template)]
#[template(path = "plan.html")]
pub struct PlanView {
    /// Dashboard path of the instrument, percent-encoded
    pub base_href: String,
    /// Template with its full day tree
    pub template: PracticeTemplate,
    /// Day on display, within `1..=days_count`
    pub selected_day: u32,
}

impl PlanView {
    /// View of a template with day 1 selected
    #[must_use]
    pub fn new(instrument: &str, template: PracticeTemplate) -> Self {
        Self {
            base_href: dashboard_href(instrument),
            template,
            selected_day: 1,
        }
    }

    /// Same view with another day selected, clamped to the rotation
    ///
    /// Only the selection changes; the day tree is reused as is.
    #[must_use]
    pub fn select_day(self, day_number: u32) -> Self {
        let selected_day = resolve::clamp_day(day_number, self.template.days_count);
        Self {
            selected_day,
            ..self
        }
    }

    /// The selected day, if the tree has it
    #[must_use]
    pub fn current_day(&self) -> Option<&PracticeDay> {
        resolve::find_day(&self.template, self.selected_day)
    }

    /// Template description or the default text
    #[must_use]
    pub fn description(&self) -> &str {
        self.template
            .description
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or(DEFAULT_DESCRIPTION)
    }

    /// Day links for the rotation
    #[must_use]
    pub fn day_selector(&self) -> DaySelector {
        DaySelector::new(
            self.template.days_count,
            self.selected_day,
            &format!("{}/plan", self.base_href),
        )
    }

    /// Layout of the selected day
    #[must_use]
    pub fn practice_block(&self) -> Option<PracticeBlock> {
        self.current_day().map(PracticeBlock::new)
    }
}

/// Load the plan for an instrument, showing `day` (default 1)
pub async fn load(client: &ApiClient, instrument: &str, day: Option<u32>) -> PageState<PlanView> {
    let loaded = load_active_template(client, instrument)
        .await
        .map(|t| PlanView::new(instrument, t).select_day(day.unwrap_or(1)));

    page_state(loaded, instrument, || {
        MessagePage::not_found(NO_ACTIVE_TEMPLATE).back_to_dashboard(instrument)
    })
}
