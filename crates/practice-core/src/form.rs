//! Practice log entry form

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    types::{NewLogDetail, NewPracticeLog, PracticeLog, RecordId, SectionType},
};

/// The fields of the log entry form
///
/// Each field change produces a new value; [`LogForm::defaults`] is the
/// state the form returns to after a successful save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogForm {
    /// Practice date
    pub date: NaiveDate,
    /// Selected rotation day
    pub day_number: u32,
    /// Duration in minutes, as typed
    pub duration: String,
    /// Warm-up notes
    pub warmup: String,
    /// Scales and arpeggios notes
    pub scales: String,
    /// Chosen technical focus A exercise
    pub tech_a: String,
    /// Chosen technical focus B exercise
    pub tech_b: String,
    /// Repertoire notes
    pub repertoire: String,
    /// Free-form notes
    pub notes: String,
}

impl LogForm {
    /// Empty form dated `today` on day 1
    #[must_use]
    pub const fn defaults(today: NaiveDate) -> Self {
        Self {
            date: today,
            day_number: 1,
            duration: String::new(),
            warmup: String::new(),
            scales: String::new(),
            tech_a: String::new(),
            tech_b: String::new(),
            repertoire: String::new(),
            notes: String::new(),
        }
    }

    /// Same form with another rotation day selected
    #[must_use]
    pub fn with_day(self, day_number: u32) -> Self {
        Self { day_number, ..self }
    }

    /// Content entered for a section
    #[must_use]
    pub fn section(&self, section: SectionType) -> &str {
        match section {
            SectionType::Warmup => &self.warmup,
            SectionType::Scales => &self.scales,
            SectionType::TechA => &self.tech_a,
            SectionType::TechB => &self.tech_b,
            SectionType::Repertoire => &self.repertoire,
        }
    }

    /// Section details with content, in submission order
    #[must_use]
    pub fn log_details(&self) -> Vec<NewLogDetail> {
        SectionType::ALL
            .into_iter()
            .filter_map(|section_type| {
                let content = self.section(section_type);
                (!content.is_empty()).then(|| NewLogDetail {
                    section_type,
                    content: content.to_string(),
                })
            })
            .collect()
    }

    /// Duration parsed as whole minutes
    ///
    /// # Errors
    ///
    /// Returns a validation error if the duration is not an unsigned integer.
    pub fn duration_minutes(&self) -> Result<u32> {
        self.duration
            .trim()
            .parse()
            .map_err(|_| Error::Validation {
                field: "duration".to_string(),
                message: format!("'{}' is not a whole number of minutes", self.duration),
            })
    }

    /// Build the create-log request for a template
    ///
    /// # Errors
    ///
    /// Returns a validation error if the duration is not an unsigned integer.
    pub fn to_new_log(&self, template_id: RecordId) -> Result<NewPracticeLog> {
        Ok(NewPracticeLog {
            template_id,
            day_number: self.day_number,
            practice_date: self.date,
            duration_minutes: self.duration_minutes()?,
            notes: self.notes.clone(),
            log_details: self.log_details(),
        })
    }
}

/// Result of submitting a log, independent of how it is shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The backend stored the log
    Saved(PracticeLog),
    /// The log was not stored
    Failed {
        /// Human-readable reason
        message: String,
    },
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn test_defaults() {
        let form = LogForm::defaults(today());

        assert_eq!(form.date, today());
        assert_eq!(form.day_number, 1);
        for field in [
            &form.duration,
            &form.warmup,
            &form.scales,
            &form.tech_a,
            &form.tech_b,
            &form.repertoire,
            &form.notes,
        ] {
            assert!(field.is_empty());
        }
    }

    #[test]
    fn test_only_non_empty_sections_are_submitted() {
        let form = LogForm {
            duration: "40".to_string(),
            scales: "X".to_string(),
            repertoire: "Y".to_string(),
            ..LogForm::defaults(today())
        };

        assert_eq!(
            form.log_details(),
            vec![
                NewLogDetail {
                    section_type: SectionType::Scales,
                    content: "X".to_string(),
                },
                NewLogDetail {
                    section_type: SectionType::Repertoire,
                    content: "Y".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_to_new_log() {
        let form = LogForm {
            duration: " 45 ".to_string(),
            warmup: "Open strings".to_string(),
            tech_a: "Long tones".to_string(),
            notes: "Felt good".to_string(),
            ..LogForm::defaults(today())
        }
        .with_day(3);

        let log = form.to_new_log(7).unwrap();
        assert_eq!(log.template_id, 7);
        assert_eq!(log.day_number, 3);
        assert_eq!(log.practice_date, today());
        assert_eq!(log.duration_minutes, 45);
        assert_eq!(log.notes, "Felt good");
        let sections: Vec<SectionType> = log.log_details.iter().map(|d| d.section_type).collect();
        assert_eq!(sections, vec![SectionType::Warmup, SectionType::TechA]);
    }

    #[rstest]
    #[case("")]
    #[case("forty")]
    #[case("-5")]
    #[case("12.5")]
    fn test_invalid_duration(#[case] duration: &str) {
        let form = LogForm {
            duration: duration.to_string(),
            ..LogForm::defaults(today())
        };

        match form.to_new_log(1) {
            Err(Error::Validation { field, .. }) => assert_eq!(field, "duration"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_with_day_keeps_other_fields() {
        let form = LogForm {
            duration: "30".to_string(),
            notes: "Tired".to_string(),
            ..LogForm::defaults(today())
        };

        let changed = form.clone().with_day(5);
        assert_eq!(changed.day_number, 5);
        assert_eq!(changed.duration, form.duration);
        assert_eq!(changed.notes, form.notes);
    }
}
