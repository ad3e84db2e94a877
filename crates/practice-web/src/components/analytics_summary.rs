//! Headline statistics for a template

use askama::Template;
use practice_core::AnalyticsSummary;

/// Session count, total minutes, average duration and per-day counts
#[derive(Debug, Clone, Template)]
#[template(path = "components/analytics_summary.html")]
pub struct AnalyticsSummaryCard {
    /// Number of logged sessions
    pub total_sessions: u32,
    /// Sum of session durations
    pub total_minutes: u32,
    /// Average duration rounded to whole minutes, halves away from zero
    pub average_label: String,
    /// Sessions per rotation day, ordered by day
    pub per_day: Vec<DayCount>,
}

/// Sessions logged for one rotation day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCount {
    /// Rotation day number
    pub day: u32,
    /// Sessions logged on that day
    pub sessions: u32,
}

impl AnalyticsSummaryCard {
    /// Build the summary from backend analytics
    #[must_use]
    pub fn new(summary: &AnalyticsSummary) -> Self {
        Self {
            total_sessions: summary.total_sessions,
            total_minutes: summary.total_minutes,
            average_label: format!("{:.0}", summary.average_duration.round()),
            per_day: summary
                .sessions_per_day()
                .into_iter()
                .map(|(day, sessions)| DayCount { day, sessions })
                .collect(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::collections::BTreeMap;

    #[test]
    fn test_average_is_rounded() {
        let card = AnalyticsSummaryCard::new(&AnalyticsSummary {
            total_sessions: 3,
            total_minutes: 128,
            average_duration: 42.7,
            sessions_by_day: BTreeMap::new(),
        });

        assert_eq!(card.average_label, "43");
        assert!(card.per_day.is_empty());

        let html = card.render().unwrap();
        assert!(html.contains("Total Sessions"));
        assert!(html.contains("128"));
        assert!(!html.contains("Sessions by Day"));
    }

    #[test]
    fn test_per_day_breakdown_rendered() {
        let card = AnalyticsSummaryCard::new(&AnalyticsSummary {
            total_sessions: 3,
            total_minutes: 90,
            average_duration: 30.0,
            sessions_by_day: BTreeMap::from([("2".to_string(), 1), ("1".to_string(), 2)]),
        });

        assert_eq!(
            card.per_day,
            vec![
                DayCount { day: 1, sessions: 2 },
                DayCount { day: 2, sessions: 1 },
            ]
        );
        assert!(card.render().unwrap().contains("Sessions by Day"));
    }

    #[rstest]
    #[case(42.5, "43")]
    #[case(2.5, "3")]
    #[case(42.4, "42")]
    #[case(0.0, "0")]
    fn test_average_halves_round_up(#[case] average_duration: f64, #[case] expected: &str) {
        let card = AnalyticsSummaryCard::new(&AnalyticsSummary {
            total_sessions: 2,
            total_minutes: 85,
            average_duration,
            sessions_by_day: BTreeMap::new(),
        });

        assert_eq!(card.average_label, expected);
    }
}
