pub mod combinations;
pub mod engine;
pub mod scoring;

pub use crate::domain::model::{DrawResult, Game, GameReport, ScoreReport, ValidationOutcome};
pub use crate::domain::ports::GameStore;
pub use crate::utils::error::Result;
