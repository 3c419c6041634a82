pub mod cache;
pub mod client;
pub mod types;

pub use cache::FixtureCache;
pub use client::FootballClient;
pub use types::{ApiEnvelope, ApiErrors};
