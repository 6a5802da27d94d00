pub mod error;
pub mod memory;
pub mod repositories;

pub use error::{Result, StoreError};
pub use memory::memory_store::{MemoryStore, MemoryTx};
pub use repositories::answer_repository::AnswerRepository;
pub use repositories::container_repository::ContainerRepository;
pub use repositories::definition_store::{DefinitionStore, DefinitionTx};
pub use repositories::question_repository::QuestionRepository;
pub use repositories::survey_repository::SurveyRepository;
