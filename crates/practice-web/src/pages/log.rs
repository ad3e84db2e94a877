//! Log entry page: record a practice session

use askama::Template;
use chrono::NaiveDate;
use practice_core::{
    DayBlocks, Error, Exercise, LogForm, PracticeTemplate, Result, SubmitOutcome, resolve,
};
use serde::Deserialize;
use tracing::{error, info, warn};

use super::{
    MessagePage, NO_ACTIVE_TEMPLATE, PageState, dashboard_href, load_active_template,
    not_found::KeptField, page_state, resolve_template,
};
use crate::{api_client::ApiClient, components::Notice};

/// Message shown after a log is stored
pub const SAVED_MESSAGE: &str = "Practice log saved! 🎉";

/// Raw form fields as posted or passed in the query string
///
/// Every field is optional so a bare GET yields the default form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LogFormInput {
    /// Practice date as `YYYY-MM-DD`
    pub date: String,
    /// Selected rotation day
    pub day_number: String,
    /// Duration in minutes
    pub duration: String,
    /// Warm-up notes
    pub warmup: String,
    /// Scales notes
    pub scales: String,
    /// Technical focus A choice
    pub tech_a: String,
    /// Technical focus B choice
    pub tech_b: String,
    /// Repertoire notes
    pub repertoire: String,
    /// Free-form notes
    pub notes: String,
}

impl LogFormInput {
    /// The posted date, or `None` when the field was left empty
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] when the field is filled but is not a
    /// `YYYY-MM-DD` date.
    pub fn checked_date(&self) -> Result<Option<NaiveDate>> {
        let raw = self.date.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| Error::Validation {
                field: "date".to_string(),
                message: format!("'{raw}' is not a date (YYYY-MM-DD)"),
            })
    }

    /// Fields in posting order, for a retry form
    #[must_use]
    pub fn kept_fields(&self) -> Vec<KeptField> {
        [
            ("date", &self.date),
            ("day_number", &self.day_number),
            ("duration", &self.duration),
            ("warmup", &self.warmup),
            ("scales", &self.scales),
            ("tech_a", &self.tech_a),
            ("tech_b", &self.tech_b),
            ("repertoire", &self.repertoire),
            ("notes", &self.notes),
        ]
        .into_iter()
        .map(|(name, value)| KeptField {
            name: name.to_string(),
            value: value.clone(),
        })
        .collect()
    }

    /// Turn raw fields into a form value
    ///
    /// A missing or unparseable date falls back to `today` and an unparseable
    /// day to 1; the day is clamped to the rotation. Submissions check the
    /// date with [`Self::checked_date`] first.
    #[must_use]
    pub fn into_form(self, today: NaiveDate, days_count: u32) -> LogForm {
        let date = self.checked_date().ok().flatten().unwrap_or(today);
        let day_number = self.day_number.trim().parse().unwrap_or(1);

        LogForm {
            date,
            day_number: resolve::clamp_day(day_number, days_count),
            duration: self.duration,
            warmup: self.warmup,
            scales: self.scales,
            tech_a: self.tech_a,
            tech_b: self.tech_b,
            repertoire: self.repertoire,
            notes: self.notes,
        }
    }
}

/// Entry in the rotation day dropdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayOption {
    /// Day number
    pub number: u32,
    /// "Day n" or "Day n: title"
    pub label: String,
    /// Whether the form has this day selected
    pub selected: bool,
}

/// Entry in a technical focus dropdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseOption {
    /// Exercise text, also the submitted value
    pub text: String,
    /// Whether the form has this exercise selected
    pub selected: bool,
}

/// The log entry form for a template
#[derive(Debug, Clone, Template)]
#[template(path = "log.html")]
pub struct LogView {
    /// Dashboard path of the instrument, percent-encoded
    pub base_href: String,
    /// Template with its full day tree
    pub template: PracticeTemplate,
    /// Current form contents
    pub form: LogForm,
    /// Banner from the last submission
    pub notice: Option<Notice>,
}

impl LogView {
    /// Form view for a template
    #[must_use]
    pub fn new(instrument: &str, template: PracticeTemplate, form: LogForm) -> Self {
        Self {
            base_href: dashboard_href(instrument),
            template,
            form,
            notice: None,
        }
    }

    /// Same view with another rotation day selected, other fields kept
    #[must_use]
    pub fn select_day(self, day_number: u32) -> Self {
        let day_number = resolve::clamp_day(day_number, self.template.days_count);
        Self {
            form: self.form.with_day(day_number),
            ..self
        }
    }

    /// Fold a submission outcome into the view
    ///
    /// A saved log resets the form to its defaults; a failure keeps what was
    /// typed so the user can retry.
    #[must_use]
    pub fn apply_outcome(self, outcome: &SubmitOutcome, today: NaiveDate) -> Self {
        match outcome {
            SubmitOutcome::Saved(_) => Self {
                form: LogForm::defaults(today),
                notice: Some(Notice::success(SAVED_MESSAGE)),
                ..self
            },
            SubmitOutcome::Failed { message } => Self {
                notice: Some(Notice::error(format!("Error saving log: {message}"))),
                ..self
            },
        }
    }

    /// Focus blocks of the selected day
    #[must_use]
    pub fn day_blocks(&self) -> DayBlocks<'_> {
        DayBlocks::for_day(&self.template, self.form.day_number)
    }

    /// Rotation day dropdown entries
    #[must_use]
    pub fn day_options(&self) -> Vec<DayOption> {
        (1..=self.template.days_count)
            .map(|number| DayOption {
                number,
                label: resolve::find_day(&self.template, number).map_or_else(
                    || format!("Day {number}"),
                    |day| format!("Day {number}: {}", day.title),
                ),
                selected: number == self.form.day_number,
            })
            .collect()
    }

    /// Technical focus A dropdown entries, sorted by display order
    #[must_use]
    pub fn tech_a_options(&self) -> Vec<ExerciseOption> {
        exercise_options(self.day_blocks().block_a_exercises(), &self.form.tech_a)
    }

    /// Technical focus B dropdown entries, sorted by display order
    #[must_use]
    pub fn tech_b_options(&self) -> Vec<ExerciseOption> {
        exercise_options(self.day_blocks().block_b_exercises(), &self.form.tech_b)
    }

    /// Date field value
    #[must_use]
    pub fn date_value(&self) -> String {
        self.form.date.format("%Y-%m-%d").to_string()
    }
}

fn exercise_options(exercises: &[&Exercise], chosen: &str) -> Vec<ExerciseOption> {
    exercises
        .iter()
        .map(|e| ExerciseOption {
            text: e.exercise_text.clone(),
            selected: e.exercise_text == chosen,
        })
        .collect()
}

/// Submit a form as a new log for the template
pub async fn submit_log(
    client: &ApiClient,
    template: &PracticeTemplate,
    form: &LogForm,
) -> SubmitOutcome {
    let new_log = match form.to_new_log(template.id) {
        Ok(new_log) => new_log,
        Err(e) => {
            warn!("Rejected log form: {e}");
            return SubmitOutcome::Failed {
                message: e.to_string(),
            };
        }
    };

    match client.create_log(&new_log).await {
        Ok(log) => {
            info!(
                log_id = log.id,
                template_id = log.template_id,
                day_number = log.day_number,
                "Practice log saved"
            );
            SubmitOutcome::Saved(log)
        }
        Err(e) => SubmitOutcome::Failed {
            message: e.to_string(),
        },
    }
}

fn not_found(instrument: &str) -> MessagePage {
    MessagePage::not_found(NO_ACTIVE_TEMPLATE).back_to_dashboard(instrument)
}

/// Load the log form for an instrument, prefilled from `input`
pub async fn load(
    client: &ApiClient,
    instrument: &str,
    input: LogFormInput,
    today: NaiveDate,
) -> PageState<LogView> {
    let loaded = load_active_template(client, instrument)
        .await
        .map(|template| {
            let form = input.into_form(today, template.days_count);
            LogView::new(instrument, template, form)
        });

    page_state(loaded, instrument, || not_found(instrument))
}

/// Handle a posted log form and return the refreshed page
///
/// What was typed survives every failure: a rejected or failed save keeps
/// the form, and a backend that cannot resolve the template gets a page
/// that can post the same fields again.
pub async fn submit(
    client: &ApiClient,
    instrument: &str,
    input: LogFormInput,
    today: NaiveDate,
) -> PageState<LogView> {
    let resolved = match resolve_template(client, instrument).await {
        Ok(resolved) => resolved,
        Err(e) if e.is_not_found() => return PageState::Message(not_found(instrument)),
        Err(e) => {
            error!(instrument, "Failed to resolve template for log: {e}");
            let action = format!("{}/log", dashboard_href(instrument));
            return PageState::Message(
                MessagePage::backend_error(format!("Error saving log: {e}"))
                    .with_retry(action, input.kept_fields())
                    .back_to_dashboard(instrument),
            );
        }
    };

    let checked = input.checked_date();
    let form = input.into_form(today, resolved.template.days_count);
    let outcome = match checked {
        Ok(_) => submit_log(client, &resolved.template, &form).await,
        Err(e) => {
            warn!("Rejected log form: {e}");
            SubmitOutcome::Failed {
                message: e.to_string(),
            }
        }
    };

    let template = match client.get_template(resolved.template.id).await {
        Ok(template) => template,
        Err(e) => {
            warn!(
                template_id = resolved.template.id,
                "Showing log form without day details: {e}"
            );
            resolved.template
        }
    };

    PageState::Ready(LogView::new(instrument, template, form).apply_outcome(&outcome, today))
}
