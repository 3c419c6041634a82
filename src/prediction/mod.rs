pub mod predictor;
pub mod prompt;
pub mod requester;

pub use predictor::{MatchPredictor, PredictionPhase, COULD_NOT_GENERATE};
pub use requester::{request_match_prediction, PredictionOutcome};
