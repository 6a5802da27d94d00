use crate::dto::question_dto::QuestionDto;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Follow-up container DTO hanging off a bool question.
///
/// Read projections omit containers with no questions, so a present value
/// always carries at least one sub-question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BooleanContainerDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depends_on: Option<bool>,
    #[serde(default)]
    pub sub_questions: Vec<QuestionDto>,
}

/// Follow-up container DTO hanging off a choice question. `depends_on`
/// carries answer ids of the owning question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChoiceContainerDto {
    #[serde(default)]
    pub depends_on: Vec<Uuid>,
    #[serde(default)]
    pub sub_questions: Vec<QuestionDto>,
}
