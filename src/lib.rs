pub mod config;
pub mod error;
pub mod models;
pub mod github;
pub mod analysis;
pub mod display;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::Config;
pub use error::{Error, Result};
pub use github::{GitHubApi, GitHubClient};
pub use analysis::Portfolio;
