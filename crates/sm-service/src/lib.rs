pub mod error;
pub mod factory;
pub mod mapper;
pub mod ranking;
pub mod requests;
pub mod resolve;
pub mod service;
pub mod versioning;

pub use error::{Result, ServiceError};
pub use requests::create_survey_request::CreateSurveyRequest;
pub use requests::update_survey_request::UpdateSurveyRequest;
pub use resolve::ResolvedQuestion;
pub use service::SurveyService;
