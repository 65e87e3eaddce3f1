//! Contact form submit button states.
//!
//! The request itself is platform glue; this module decides what the
//! button shows and when it accepts another submission.

use crate::error::WidgetError;
use serde::{Deserialize, Serialize};

/// How long the success or failure label stays before the button resets.
pub const RESET_DELAY_MS: u32 = 3000;

pub const FALLBACK_FAILURE: &str = "Something went wrong";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactConfig {
    /// Relay endpoint. When unset, the form's `action` attribute is used.
    pub endpoint: Option<String>,
    pub reset_ms: u32,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            reset_ms: RESET_DELAY_MS,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed(String),
}

impl SubmitState {
    pub fn label(&self) -> &'static str {
        match self {
            SubmitState::Idle => "Send Message",
            SubmitState::Sending => "Sending...",
            SubmitState::Sent => "Message Sent!",
            SubmitState::Failed(_) => "Something went wrong.",
        }
    }

    pub fn class(&self) -> Option<&'static str> {
        match self {
            SubmitState::Idle => None,
            SubmitState::Sending => Some("btn-loading"),
            SubmitState::Sent => Some("btn-success"),
            SubmitState::Failed(_) => Some("btn-error"),
        }
    }

    pub fn disabled(&self) -> bool {
        !matches!(self, SubmitState::Idle)
    }
}

/// Every class any state may put on the button.
pub const STATE_CLASSES: [&str; 3] = ["btn-loading", "btn-success", "btn-error"];

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    state: SubmitState,
}

#[derive(Debug, Deserialize)]
struct RelayErrorBody {
    error: Option<String>,
}

impl ContactForm {
    pub fn state(&self) -> &SubmitState {
        &self.state
    }

    /// Starts a submission.
    ///
    /// # Errors
    ///
    /// `WidgetError::SubmissionInFlight` while a previous submission has not
    /// yet reset.
    pub fn begin(&mut self) -> Result<&SubmitState, WidgetError> {
        if self.state.disabled() {
            return Err(WidgetError::SubmissionInFlight);
        }
        self.state = SubmitState::Sending;
        Ok(&self.state)
    }

    /// Records the relay's answer.
    pub fn finish(&mut self, outcome: Result<(), String>) -> &SubmitState {
        self.state = match outcome {
            Ok(()) => SubmitState::Sent,
            Err(message) => {
                log::error!("Form submission error: {}", message);
                SubmitState::Failed(message)
            }
        };
        &self.state
    }

    /// Returns to idle once the reset delay has passed.
    pub fn reset(&mut self) -> &SubmitState {
        self.state = SubmitState::Idle;
        &self.state
    }
}

/// Failure message for a non-success relay response: the JSON `error`
/// field when present, otherwise a generic message with the status.
pub fn failure_message(status: u16, body: &str) -> String {
    serde_json::from_str::<RelayErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|e| !e.trim().is_empty())
        .unwrap_or_else(|| format!("{} (HTTP {})", FALLBACK_FAILURE, status))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_cycle() {
        let mut form = ContactForm::default();
        assert_eq!(form.state().label(), "Send Message");
        assert!(!form.state().disabled());

        let sending = form.begin().unwrap();
        assert_eq!(sending.label(), "Sending...");
        assert_eq!(sending.class(), Some("btn-loading"));

        assert_eq!(form.finish(Ok(())), &SubmitState::Sent);
        assert!(form.state().disabled());
        assert_eq!(form.reset(), &SubmitState::Idle);
    }

    #[test]
    fn test_second_submit_rejected_until_reset() {
        let mut form = ContactForm::default();
        form.begin().unwrap();
        assert!(matches!(form.begin(), Err(WidgetError::SubmissionInFlight)));

        form.finish(Err("offline".into()));
        assert!(matches!(form.begin(), Err(WidgetError::SubmissionInFlight)));

        form.reset();
        assert!(form.begin().is_ok());
    }

    #[test]
    fn test_failure_state_label_and_class() {
        let state = SubmitState::Failed("boom".into());
        assert_eq!(state.label(), "Something went wrong.");
        assert_eq!(state.class(), Some("btn-error"));
    }

    #[test]
    fn test_failure_message_from_body() {
        assert_eq!(
            failure_message(422, r#"{ "error": "Email is invalid" }"#),
            "Email is invalid"
        );
        assert_eq!(
            failure_message(500, "<html>"),
            "Something went wrong (HTTP 500)"
        );
        assert_eq!(
            failure_message(400, r#"{ "error": "" }"#),
            "Something went wrong (HTTP 400)"
        );
    }
}
