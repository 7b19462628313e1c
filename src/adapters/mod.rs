// Adapters layer: concrete comparators behind the domain `Comparator` port.

pub mod local;
pub mod openai;

pub use local::OrderedWordsComparator;
pub use openai::OpenAiComparator;
