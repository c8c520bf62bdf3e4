pub mod backend;
pub mod calendar;
pub mod config;
pub mod errors;
pub mod models;
pub mod services;
