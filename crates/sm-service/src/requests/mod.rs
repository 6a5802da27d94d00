pub mod create_survey_request;
pub mod update_survey_request;
