//! Rotation day picker

use askama::Template;

/// Row of links, one per rotation day
#[derive(Debug, Clone, Template)]
#[template(path = "components/day_selector.html")]
pub struct DaySelector {
    /// One entry per day, in order
    pub days: Vec<DayLink>,
}

/// Link to a single rotation day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayLink {
    /// Day number, starting at 1
    pub number: u32,
    /// Page showing that day
    pub href: String,
    /// Whether this is the day on display
    pub selected: bool,
}

impl DaySelector {
    /// Links for days `1..=days_count`, marking `selected_day`
    #[must_use]
    pub fn new(days_count: u32, selected_day: u32, base_href: &str) -> Self {
        let days = (1..=days_count)
            .map(|number| DayLink {
                number,
                href: format!("{base_href}?day={number}"),
                selected: number == selected_day,
            })
            .collect();

        Self { days }
    }
}
