mod container;
mod question;
mod release_status;
mod survey;
