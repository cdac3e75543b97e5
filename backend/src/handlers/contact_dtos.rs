use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidateEmail, ValidationError};

use crate::error::ApiError;
use crate::models::contact_models::{ContactSubmission, NewContactSubmission};

/// Body of `POST /api/contact`. Absent keys deserialize as empty strings so
/// they are reported as missing fields instead of a JSON parse failure.
#[derive(Debug, Default, Clone, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactRequest {
    #[validate(custom(function = "required"), length(max = 200, message = "Name must be at most 200 characters"))]
    pub name: String,
    #[validate(
        custom(function = "required"),
        custom(function = "email_address"),
        length(max = 320, message = "Email must be at most 320 characters")
    )]
    pub email: String,
    #[validate(custom(function = "required"), length(max = 100, message = "Project type must be at most 100 characters"))]
    pub project_type: String,
    #[validate(custom(function = "required"), length(max = 5000, message = "Message must be at most 5000 characters"))]
    pub message: String,
}

fn required(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

// Empty input is left to `required` so a blank email gets a single message.
fn email_address(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || value.validate_email() {
        return Ok(());
    }
    let mut error = ValidationError::new("email");
    error.message = Some(Cow::Borrowed("Email must be a valid email address"));
    Err(error)
}

impl ContactRequest {
    fn trimmed(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            project_type: self.project_type.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }

    /// Trims every field, validates, and converts into an insertable record.
    pub fn into_new_submission(self) -> Result<NewContactSubmission, ApiError> {
        let req = self.trimmed();
        <Self as Validate>::validate(&req)?;
        Ok(NewContactSubmission {
            name: req.name,
            email: req.email,
            project_type: req.project_type,
            message: req.message,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub project_type: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl From<ContactSubmission> for ContactResponse {
    fn from(submission: ContactSubmission) -> Self {
        Self {
            id: submission.id,
            name: submission.name,
            email: submission.email,
            project_type: submission.project_type,
            message: submission.message,
            created_at: DateTime::from_timestamp(submission.created_at, 0).unwrap_or_default(),
        }
    }
}
