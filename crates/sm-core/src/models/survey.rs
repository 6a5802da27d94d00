use crate::models::interval_type::IntervalType;
use crate::models::release_status::ReleaseStatus;
use crate::models::reminder_type::ReminderType;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One version of a survey definition.
///
/// Versions of the same survey share `name_id`; the pair
/// (`name_id`, `version`) is unique across the store. A survey is also the
/// root of its question tree: the root container shares the survey's id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Survey {
    pub id: Uuid,
    pub name_id: String,
    pub title: String,
    pub description: Option<String>,
    pub version: i32,
    pub interval_type: IntervalType,
    pub release_status: ReleaseStatus,
    pub reminder_type: ReminderType,
    pub created_at: DateTime<Utc>,
}

impl Survey {
    pub fn new(name_id: String, title: String, description: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name_id,
            title,
            description,
            version: 1,
            interval_type: IntervalType::None,
            release_status: ReleaseStatus::Released,
            reminder_type: ReminderType::None,
            created_at: Utc::now(),
        }
    }

    pub fn is_released(&self) -> bool {
        self.release_status == ReleaseStatus::Released
    }
}
