//! Contact inquiry intake: presence validation and submit-control state.
//!
//! Delivery itself is not handled here; the API layer hands a validated
//! [`ContactSubmission`] to its submitter and reports the outcome back
//! through [`SubmitControl`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;

/// Alert shown when a required field is missing.
pub const MISSING_FIELDS_ALERT: &str = "필수 항목을 모두 입력해주세요.";

/// Alert shown when the submission fails.
pub const SUBMIT_FAILED_ALERT: &str = "문의 전송에 실패했습니다. 다시 시도해주세요.";

/// Submit button label while idle.
pub const SUBMIT_LABEL: &str = "문의하기";

/// Submit button label while a submission is in flight.
pub const SUBMITTING_LABEL: &str = "전송 중...";

/// Fields that must be present and non-empty, in form order.
pub const REQUIRED_FIELDS: &[&str] = &["name", "phone", "message"];

// ---------------------------------------------------------------------------
// Form
// ---------------------------------------------------------------------------

/// Raw contact form fields as posted by the browser.
///
/// Values are not trimmed: a whitespace-only value counts as present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[validate(required, length(min = 1))]
    pub phone: Option<String>,
    pub email: Option<String>,
    pub project_type: Option<String>,
    #[validate(required, length(min = 1))]
    pub message: Option<String>,
}

impl ContactForm {
    /// Required fields that are absent or empty, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        match self.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => {
                let failed: Vec<String> = errors
                    .field_errors()
                    .keys()
                    .map(|k| k.to_string())
                    .collect();
                REQUIRED_FIELDS
                    .iter()
                    .copied()
                    .filter(|f| failed.iter().any(|k| k == f))
                    .collect()
            }
        }
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Validate and stamp the form for submission.
    pub fn into_submission(self, submitted_at: DateTime<Utc>) -> Result<ContactSubmission, CoreError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(CoreError::Validation(format!(
                "missing required fields: {}",
                missing.join(", ")
            )));
        }

        Ok(ContactSubmission {
            name: self.name.unwrap_or_default(),
            phone: self.phone.unwrap_or_default(),
            email: self.email.filter(|e| !e.is_empty()),
            project_type: self.project_type.filter(|t| !t.is_empty()),
            message: self.message.unwrap_or_default(),
            submitted_at,
        })
    }
}

/// A validated inquiry ready to be handed to a submitter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub project_type: Option<String>,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Submit control
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitState {
    Ready,
    Submitting,
    /// Terminal: the form is replaced by the success message.
    Succeeded,
    /// The control is usable again; carries the alert to show.
    Failed { alert: String },
}

/// Submit button lifecycle for one form.
///
/// A submission may only start from `Ready` or `Failed`, so a second
/// submission cannot begin while one is in flight or after success.
#[derive(Debug, Clone)]
pub struct SubmitControl {
    state: SubmitState,
}

impl Default for SubmitControl {
    fn default() -> Self {
        Self {
            state: SubmitState::Ready,
        }
    }
}

impl SubmitControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SubmitState {
        &self.state
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self.state, SubmitState::Ready | SubmitState::Failed { .. })
    }

    pub fn form_visible(&self) -> bool {
        self.state != SubmitState::Succeeded
    }

    pub fn button_label(&self) -> &'static str {
        match self.state {
            SubmitState::Submitting => SUBMITTING_LABEL,
            _ => SUBMIT_LABEL,
        }
    }

    pub fn alert(&self) -> Option<&str> {
        match &self.state {
            SubmitState::Failed { alert } => Some(alert),
            _ => None,
        }
    }

    /// Disable the control for an in-flight submission.
    pub fn begin(&mut self) -> Result<(), CoreError> {
        if !self.is_enabled() {
            return Err(CoreError::Conflict(
                "a submission is already in progress or completed".to_string(),
            ));
        }
        self.state = SubmitState::Submitting;
        Ok(())
    }

    /// Record the outcome of the in-flight submission.
    pub fn finish<E>(&mut self, outcome: Result<(), E>) -> Result<(), CoreError> {
        if self.state != SubmitState::Submitting {
            return Err(CoreError::Conflict("no submission in progress".to_string()));
        }
        self.state = match outcome {
            Ok(()) => SubmitState::Succeeded,
            Err(_) => SubmitState::Failed {
                alert: SUBMIT_FAILED_ALERT.to_string(),
            },
        };
        Ok(())
    }

    /// Record a validation failure without starting a submission.
    pub fn reject(&mut self) {
        if self.is_enabled() {
            self.state = SubmitState::Failed {
                alert: MISSING_FIELDS_ALERT.to_string(),
            };
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
