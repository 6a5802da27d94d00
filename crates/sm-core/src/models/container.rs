use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Grouping node of a question tree.
///
/// Every survey owns exactly one root container, stored under the survey's
/// own id. Nested containers hang off a bool or choice question and gate
/// their children on that question's answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Container {
    pub id: Uuid,
    pub kind: ContainerKind,

    /// The question this container hangs off. A weak upward link used for
    /// lookup only; `None` marks a survey root.
    pub parent_question_id: Option<Uuid>,

    /// Ordered child questions. List order is presentation order; each child
    /// carries its own rank.
    pub question_ids: Vec<Uuid>,

    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ContainerKind {
    /// Root of a survey's question tree. Always visible.
    Survey,

    /// Shown when the parent bool question's answer equals `depends_on`.
    /// `None` means always shown.
    Boolean { depends_on: Option<bool> },

    /// Shown when the parent choice question's selection hits any of the
    /// answers in `depends_on`. Empty means always shown.
    Choice { depends_on: Vec<Uuid> },
}

impl Container {
    /// Root container of a survey; shares the survey's id.
    pub fn survey_root(survey_id: Uuid) -> Self {
        Self {
            id: survey_id,
            kind: ContainerKind::Survey,
            parent_question_id: None,
            question_ids: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn nested(kind: ContainerKind, parent_question_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            parent_question_id: Some(parent_question_id),
            question_ids: Vec::new(),
            created_at: Utc::now(),
        }
    }
}

impl ContainerKind {
    pub fn is_survey(&self) -> bool {
        matches!(self, Self::Survey)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Survey => "survey",
            Self::Boolean { .. } => "boolean",
            Self::Choice { .. } => "choice",
        }
    }
}
