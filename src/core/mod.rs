pub mod checker;
pub mod normalize;

pub use crate::domain::model::{GuessRequest, MatchResult};
pub use crate::domain::ports::Comparator;
pub use crate::utils::error::Result;
