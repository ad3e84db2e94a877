//! Not-found and error page

use askama::Template;
use axum::http::StatusCode;

use super::dashboard_href;

/// Hint shown when the backend cannot be used
pub const BACKEND_HINT: &str = "Make sure the backend server is running.";

/// A submitted field carried over so it can be sent again
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeptField {
    /// Form field name
    pub name: String,
    /// Value as submitted
    pub value: String,
}

/// A page that only carries a message and a way back
#[derive(Debug, Clone, Template)]
#[template(path = "message.html")]
pub struct MessagePage {
    /// Page heading
    pub heading: String,
    /// Main message
    pub message: String,
    /// Optional second line, empty when absent
    pub hint: String,
    /// Where the back link goes
    pub back_href: String,
    /// Back link text
    pub back_label: String,
    /// HTTP status to answer with
    pub status: StatusCode,
    /// Where kept fields are posted again; empty when there is no retry form
    pub retry_action: String,
    /// Fields of a rejected submission
    pub kept: Vec<KeptField>,
}

impl MessagePage {
    /// 404 page with a message and a link back to the start page
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            heading: "Practice Journal".to_string(),
            message: message.into(),
            hint: String::new(),
            back_href: "/".to_string(),
            back_label: "← Back to Instruments".to_string(),
            status: StatusCode::NOT_FOUND,
            retry_action: String::new(),
            kept: Vec::new(),
        }
    }

    /// 502 page for a backend that failed or could not be reached
    pub fn backend_error(message: impl Into<String>) -> Self {
        Self::not_found(message)
            .with_hint(BACKEND_HINT)
            .with_status(StatusCode::BAD_GATEWAY)
    }

    /// Page shown when a route does not exist at all
    #[must_use]
    pub fn unknown_route() -> Self {
        Self {
            heading: "Page Not Found".to_string(),
            ..Self::not_found("The page you are looking for does not exist.")
        }
    }

    /// Same page with a back link to an instrument dashboard
    #[must_use]
    pub fn back_to_dashboard(self, instrument: &str) -> Self {
        Self {
            back_href: dashboard_href(instrument),
            back_label: "← Back to Dashboard".to_string(),
            ..self
        }
    }

    /// Same page with an extra line under the message
    #[must_use]
    pub fn with_hint(self, hint: impl Into<String>) -> Self {
        Self {
            hint: hint.into(),
            ..self
        }
    }

    /// Same page with another status
    #[must_use]
    pub fn with_status(self, status: StatusCode) -> Self {
        Self { status, ..self }
    }

    /// Same page with a form that posts `kept` to `action` again
    ///
    /// Empty fields are dropped.
    #[must_use]
    pub fn with_retry(self, action: impl Into<String>, kept: Vec<KeptField>) -> Self {
        Self {
            retry_action: action.into(),
            kept: kept.into_iter().filter(|f| !f.value.is_empty()).collect(),
            ..self
        }
    }

    /// Whether a retry form is shown
    #[must_use]
    pub fn has_retry(&self) -> bool {
        !self.retry_action.is_empty()
    }
}
