use serde::Serialize;
use serde_json::Value;

/// Per-run inputs collected from the editor screen when auto apply starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoApplyParams {
    pub api_key: String,
    pub job_title: String,
    pub job_location: String,
    pub phone_number: String,
    pub user_website: String,
    /// Kept as entered; the backend owns numeric interpretation.
    pub max_applications: String,
}

/// Input contract of the auto-apply backend.
///
/// Assembled and surfaced locally; this component never sends it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoApplyRequest {
    pub api_key: String,
    pub job_title: String,
    pub job_location: String,
    pub phone_number: String,
    pub user_website: String,
    pub max_applications: String,
    pub resume_data: Value,
}

impl AutoApplyRequest {
    pub fn assemble(params: AutoApplyParams, resume_data: Value) -> Self {
        Self {
            api_key: params.api_key,
            job_title: params.job_title,
            job_location: params.job_location,
            phone_number: params.phone_number,
            user_website: params.user_website,
            max_applications: params.max_applications,
            resume_data,
        }
    }
}
