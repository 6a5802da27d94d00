use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One selectable option of a choice question.
///
/// `value` is the display text. Version copies match answers across trees by
/// this value, so it doubles as the answer's stable identity within a
/// question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    pub id: Uuid,
    pub value: String,
    pub created_at: DateTime<Utc>,
}

impl Answer {
    pub fn new(value: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            value,
            created_at: Utc::now(),
        }
    }
}
