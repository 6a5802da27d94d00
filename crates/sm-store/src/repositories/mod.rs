pub mod answer_repository;
pub mod container_repository;
pub mod definition_store;
pub mod question_repository;
pub mod survey_repository;
