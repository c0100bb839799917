pub mod pipeline;

use serde::Deserialize;

pub use pipeline::SubmitOutcome;

/// Inbound contact form body. Field names are camelCase on the wire.
/// Nothing is required and nothing is validated; missing keys become NULLs
/// in storage.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub contact_method: Option<String>,
    pub plan: Option<String>,
    pub description: Option<String>,
    pub deadline: Option<String>,
    pub terms: Option<bool>,
}
