pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use app::render::OutputFormat;
pub use config::{cli::JsonFileStore, toml_config::TomlConfig, Settings};
pub use core::{engine::LotteryEngine, scoring::evaluate};
pub use domain::model::{DrawResult, Game, GameReport, Number, ScoreReport, ValidationOutcome};
pub use domain::ports::GameStore;
pub use utils::error::{LotteryError, Result};
