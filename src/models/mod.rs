pub mod fixture;
pub mod prediction;

pub use fixture::{Fixture, FixtureInfo, FixtureStatus, Goals, League, Score, Team, Teams};
pub use prediction::{Confidence, Prediction, PredictionResult};
