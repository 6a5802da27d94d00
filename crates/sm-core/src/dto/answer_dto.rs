use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Answer option DTO for JSON serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub value: String,
}
