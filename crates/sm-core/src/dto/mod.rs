pub mod answer_dto;
pub mod container_dto;
pub mod question_dto;
pub mod survey_dto;
