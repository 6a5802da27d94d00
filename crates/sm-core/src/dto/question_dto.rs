use crate::dto::answer_dto::AnswerDto;
use crate::dto::container_dto::{BooleanContainerDto, ChoiceContainerDto};
use crate::models::question_type::QuestionType;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Question DTO for JSON serialization, used both as create/update payload
/// and as read projection.
///
/// `id` is absent on create payloads and required on update payloads. The
/// type-specific fields live in [`QuestionPayloadDto`], flattened next to the
/// common fields under a `type` tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub prompt: String,
    pub rank: i32,
    #[serde(default)]
    pub optional: bool,
    #[serde(flatten)]
    pub payload: QuestionPayloadDto,
}

/// Type-specific half of a question DTO, tagged by question type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuestionPayloadDto {
    Bool {
        #[serde(default)]
        default_answer: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        container: Option<BooleanContainerDto>,
    },
    Choice {
        #[serde(default)]
        answers: Vec<AnswerDto>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default_answer: Option<Uuid>,
        #[serde(default)]
        multiple: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        container: Option<ChoiceContainerDto>,
    },
    Range {
        min_value: i32,
        max_value: i32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min_text: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_text: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default_value: Option<i32>,
    },
    Number {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min_value: Option<i32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_value: Option<i32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default_value: Option<i32>,
    },
    Text {
        #[serde(default)]
        multiline: bool,
        max_length: i32,
    },
    Checklist {
        #[serde(default)]
        entries: Vec<ChecklistEntryDto>,
    },
    ChecklistEntry {
        #[serde(default)]
        default_answer: bool,
    },
}

/// Checklist entry DTO. Entries ride inside their checklist's payload rather
/// than appearing as standalone questions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecklistEntryDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub prompt: String,
    pub rank: i32,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub default_answer: bool,
}

impl QuestionDto {
    pub fn question_type(&self) -> QuestionType {
        self.payload.question_type()
    }
}

impl QuestionPayloadDto {
    pub fn question_type(&self) -> QuestionType {
        match self {
            Self::Bool { .. } => QuestionType::Bool,
            Self::Choice { .. } => QuestionType::Choice,
            Self::Range { .. } => QuestionType::Range,
            Self::Number { .. } => QuestionType::Number,
            Self::Text { .. } => QuestionType::Text,
            Self::Checklist { .. } => QuestionType::Checklist,
            Self::ChecklistEntry { .. } => QuestionType::ChecklistEntry,
        }
    }
}
