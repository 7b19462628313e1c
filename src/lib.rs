pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use config::{JudgeKind, LogFormat, OpenAiSettings};
pub use crate::core::{checker::GuessChecker, normalize::normalize_text};
pub use domain::{
    model::{GuessRequest, MatchResult},
    phrases::PhraseList,
    ports::Comparator,
};
pub use server::{create_router, AppState};
pub use utils::error::{GameError, Result};
