use crate::models::question_type::QuestionType;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One question of a survey, of one of seven fixed types.
///
/// `rank` is the zero-based position among the siblings of the owning
/// container; siblings hold the contiguous range `0..N-1`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: Uuid,
    pub prompt: String,
    pub rank: i32,
    pub optional: bool,
    pub created_at: DateTime<Utc>,
    pub kind: QuestionKind,
}

/// Type-specific payload of a question.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    Bool {
        default_answer: bool,
        /// Follow-up container gated on this question's answer.
        container_id: Option<Uuid>,
    },
    Choice {
        /// Owned answer options, in presentation order.
        answer_ids: Vec<Uuid>,
        /// Pre-selected answer; must be one of `answer_ids`.
        default_answer_id: Option<Uuid>,
        /// Whether more than one answer may be selected.
        multiple: bool,
        /// Follow-up container gated on the selected answers.
        container_id: Option<Uuid>,
    },
    Range {
        min_value: i32,
        max_value: i32,
        min_text: Option<String>,
        max_text: Option<String>,
        default_value: Option<i32>,
    },
    Number {
        min_value: Option<i32>,
        max_value: Option<i32>,
        default_value: Option<i32>,
    },
    Text {
        multiline: bool,
        max_length: i32,
    },
    Checklist {
        /// Owned checklist entries, themselves stored as questions.
        entry_ids: Vec<Uuid>,
    },
    /// A single tickable item of a checklist. Never a direct container child.
    ChecklistEntry { default_answer: bool },
}

impl Question {
    pub fn new(prompt: String, rank: i32, optional: bool, kind: QuestionKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            prompt,
            rank,
            optional,
            created_at: Utc::now(),
            kind,
        }
    }

    pub fn question_type(&self) -> QuestionType {
        self.kind.question_type()
    }

    /// Id of the nested follow-up container, for the kinds that carry one.
    pub fn nested_container_id(&self) -> Option<Uuid> {
        match &self.kind {
            QuestionKind::Bool { container_id, .. }
            | QuestionKind::Choice { container_id, .. } => *container_id,
            _ => None,
        }
    }
}

impl QuestionKind {
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
