//! Summary card for one logged session

use askama::Template;
use practice_core::PracticeLog;

/// A logged session as shown on the history page
#[derive(Debug, Clone, Template)]
#[template(path = "components/history_card.html")]
pub struct HistoryCard {
    /// Long-form practice date, e.g. "Monday, January 15, 2024"
    pub date_label: String,
    /// Session length in minutes
    pub duration_minutes: u32,
    /// Title of the rotation day, empty when the day is unknown
    pub day_title: String,
    /// Session notes, possibly empty
    pub notes: String,
    /// Sections that have content
    pub details: Vec<DetailLine>,
}

/// One recorded section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailLine {
    /// Capitalised section name
    pub label: String,
    /// What was practiced
    pub content: String,
}

impl HistoryCard {
    /// Card for a log, with the title of its rotation day if known
    #[must_use]
    pub fn new(log: &PracticeLog, day_title: Option<&str>) -> Self {
        let details = log
            .log_details
            .iter()
            .filter_map(|detail| {
                detail.non_empty_content().map(|content| DetailLine {
                    label: detail.section_type.label(),
                    content: content.to_string(),
                })
            })
            .collect();

        Self {
            date_label: log.practice_date.format("%A, %B %-d, %Y").to_string(),
            duration_minutes: log.duration_minutes,
            day_title: day_title.unwrap_or_default().to_string(),
            notes: log.notes.clone().unwrap_or_default(),
            details,
        }
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use practice_core::{LogDetail, SectionType};
    use pretty_assertions::assert_eq;

    fn log() -> PracticeLog {
        PracticeLog {
            id: 1,
            template_id: 3,
            day_number: 2,
            practice_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            duration_minutes: 45,
            notes: None,
            log_details: vec![
                LogDetail {
                    id: Some(1),
                    log_id: Some(1),
                    section_type: SectionType::TechA,
                    content: Some("Spiccato".to_string()),
                },
                LogDetail {
                    id: Some(2),
                    log_id: Some(1),
                    section_type: SectionType::Warmup,
                    content: Some(String::new()),
                },
            ],
        }
    }

    #[test]
    fn test_card_fields() {
        let card = HistoryCard::new(&log(), Some("Shifting Day"));

        assert_eq!(card.date_label, "Monday, January 15, 2024");
        assert_eq!(card.day_title, "Shifting Day");
        assert_eq!(
            card.details,
            vec![DetailLine {
                label: "TechA".to_string(),
                content: "Spiccato".to_string(),
            }]
        );
    }

    #[test]
    fn test_render_without_title_or_notes() {
        let html = HistoryCard::new(&log(), None).render().unwrap();

        assert!(html.contains("45 min"));
        assert!(!html.contains("day-title"));
        assert!(!html.contains("Notes:"));
        assert!(html.contains("Spiccato"));
    }
}
