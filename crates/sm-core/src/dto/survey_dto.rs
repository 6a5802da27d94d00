use crate::dto::question_dto::QuestionDto;
use crate::models::interval_type::IntervalType;
use crate::models::release_status::ReleaseStatus;
use crate::models::reminder_type::ReminderType;
use crate::models::survey::Survey;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Survey DTO for JSON serialization, carrying the hydrated question tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyDto {
    pub id: Uuid,
    pub name_id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub version: i32,
    pub interval_type: IntervalType,
    pub release_status: ReleaseStatus,
    pub reminder_type: ReminderType,
    #[serde(default)]
    pub questions: Vec<QuestionDto>,
}

impl SurveyDto {
    /// Convert from domain model with an already projected question tree.
    pub fn from_survey(survey: &Survey, questions: Vec<QuestionDto>) -> Self {
        Self {
            id: survey.id,
            name_id: survey.name_id.clone(),
            title: survey.title.clone(),
            description: survey.description.clone(),
            version: survey.version,
            interval_type: survey.interval_type,
            release_status: survey.release_status,
            reminder_type: survey.reminder_type,
            questions,
        }
    }
}
