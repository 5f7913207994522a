pub mod app;
pub mod config;
pub mod hints;
pub mod import;
pub mod notebook;
pub mod quiz;
pub mod words;
