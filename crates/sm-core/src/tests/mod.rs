mod dto;
mod models;
