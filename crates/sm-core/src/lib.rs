pub mod dto;
pub mod error;
pub mod models;

pub use error::{CoreError, CoreResult};

pub use dto::answer_dto::AnswerDto;
pub use dto::container_dto::{BooleanContainerDto, ChoiceContainerDto};
pub use dto::question_dto::{ChecklistEntryDto, QuestionDto, QuestionPayloadDto};
pub use dto::survey_dto::SurveyDto;
pub use models::answer::Answer;
pub use models::container::{Container, ContainerKind};
pub use models::interval_type::IntervalType;
pub use models::question::{Question, QuestionKind};
pub use models::question_type::QuestionType;
pub use models::release_status::ReleaseStatus;
pub use models::reminder_type::ReminderType;
pub use models::survey::Survey;

#[cfg(test)]
mod tests;
