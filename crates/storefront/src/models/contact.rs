//! Contact form submissions.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use sweet_slac_core::SubmissionId;

use crate::error::ValidationError;

/// Contact form data, as typed.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// A message left through the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub id: SubmissionId,
    pub name: String,
    pub email: String,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

impl ContactSubmission {
    /// Submission time in the local timezone, e.g. `19/10/2026, 14:03:51`.
    #[must_use]
    pub fn display_date(&self) -> String {
        self.submitted_at
            .with_timezone(&Local)
            .format("%d/%m/%Y, %H:%M:%S")
            .to_string()
    }
}

/// Append-only log of contact submissions, oldest first in storage.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inbox {
    submissions: Vec<ContactSubmission>,
}

impl Inbox {
    #[must_use]
    pub const fn new(submissions: Vec<ContactSubmission>) -> Self {
        Self { submissions }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.submissions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.submissions.is_empty()
    }

    /// Record a submission.
    ///
    /// The email is not format-checked here.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::MissingContactFields` if any field is blank.
    pub fn submit(
        &mut self,
        form: &ContactForm,
        id: SubmissionId,
        submitted_at: DateTime<Utc>,
    ) -> Result<ContactSubmission, ValidationError> {
        let name = form.name.trim();
        let email = form.email.trim();
        let message = form.message.trim();
        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(ValidationError::MissingContactFields);
        }

        let submission = ContactSubmission {
            id,
            name: name.to_owned(),
            email: email.to_owned(),
            message: message.to_owned(),
            submitted_at,
        };
        self.submissions.push(submission.clone());
        Ok(submission)
    }

    /// Submissions, most recent first.
    #[must_use]
    pub fn list(&self) -> Vec<&ContactSubmission> {
        self.submissions.iter().rev().collect()
    }

    /// Largest ID issued so far.
    #[must_use]
    pub fn max_id(&self) -> Option<SubmissionId> {
        self.submissions.iter().map(|s| s.id).max()
    }
}
