pub mod history;
pub mod live_results;
