use serde::Deserialize;

/// Request body for updating a survey header. Only the descriptive fields
/// are touched; version, lifecycle state and the question tree stay as they
/// are.
#[derive(Debug, Deserialize)]
pub struct UpdateSurveyRequest {
    pub name_id: String,

    pub title: String,

    #[serde(default)]
    pub description: Option<String>,
}
