use chrono::{DateTime, Utc};
use serde::Serialize;

/// A stored contact-form submission. Every form field is nullable: the
/// handler forwards whatever the client sent and the database accepts it
/// as-is.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct ContactSubmission {
    pub id: i64,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub contact_method: Option<String>,
    pub plan: Option<String>,
    pub project_description: Option<String>,
    pub deadline: Option<String>,
    pub terms: Option<bool>,
    pub created_at: DateTime<Utc>,
}
