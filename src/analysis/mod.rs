pub mod filter;
pub mod portfolio;
pub mod stats;

pub use portfolio::{Portfolio, DEFAULT_SELECTION_LIMIT};
pub use stats::TOP_LANGUAGES;
