pub mod user;
pub mod repository;
pub mod options;
pub mod stats;

pub use user::*;
pub use repository::*;
pub use options::*;
pub use stats::*;
