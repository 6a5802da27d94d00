#![allow(dead_code)]

use chrono::Utc;
use sm_core::{
    Answer, Container, ContainerKind, IntervalType, Question, QuestionKind, ReleaseStatus,
    ReminderType, Survey,
};
use uuid::Uuid;

/// Creates a test Survey with sensible defaults
pub fn create_test_survey(name_id: &str, version: i32) -> Survey {
    Survey {
        id: Uuid::new_v4(),
        name_id: name_id.to_string(),
        title: format!("{name_id} survey"),
        description: Some("Test survey description".to_string()),
        version,
        interval_type: IntervalType::None,
        release_status: ReleaseStatus::Released,
        reminder_type: ReminderType::None,
        created_at: Utc::now(),
    }
}

/// Creates a root Container for the given survey
pub fn create_test_root_container(survey_id: Uuid, question_ids: Vec<Uuid>) -> Container {
    Container {
        id: survey_id,
        kind: ContainerKind::Survey,
        parent_question_id: None,
        question_ids,
        created_at: Utc::now(),
    }
}

/// Creates a test text Question at the given rank
pub fn create_test_question(rank: i32) -> Question {
    Question {
        id: Uuid::new_v4(),
        prompt: format!("Question {rank}"),
        rank,
        optional: false,
        created_at: Utc::now(),
        kind: QuestionKind::Text {
            multiline: false,
            max_length: 255,
        },
    }
}

/// Creates a test Answer with the given display value
pub fn create_test_answer(value: &str) -> Answer {
    Answer {
        id: Uuid::new_v4(),
        value: value.to_string(),
        created_at: Utc::now(),
    }
}
