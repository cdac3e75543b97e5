use std::collections::HashMap;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const PROJECT_TYPES: [&str; 5] = [
    "Brand film",
    "Product launch",
    "Interactive site",
    "3D & motion",
    "Something else",
];

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub project_type: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub id: String,
    pub name: String,
    pub email: String,
    pub project_type: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default)]
    pub fields: HashMap<String, Vec<String>>,
}

impl ErrorResponse {
    pub fn field(&self, name: &str) -> Option<String> {
        self.fields.get(name).map(|messages| messages.join(". "))
    }
}
