pub mod apifootball;
pub mod config;
pub mod errors;
pub mod gemini;
pub mod models;
pub mod prediction;
pub mod services;
pub mod share;
