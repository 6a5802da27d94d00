pub mod answer;
pub mod container;
pub mod interval_type;
pub mod question;
pub mod question_type;
pub mod release_status;
pub mod reminder_type;
pub mod survey;
