use serde::Deserialize;

/// Request body for creating a survey
#[derive(Debug, Deserialize)]
pub struct CreateSurveyRequest {
    /// Stable name shared by all versions of the survey (required)
    pub name_id: String,

    /// Display title (required)
    pub title: String,

    /// Optional description
    #[serde(default)]
    pub description: Option<String>,
}
