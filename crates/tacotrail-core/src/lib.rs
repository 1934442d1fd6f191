// Core business logic lives here - the brain of the operation
pub mod browser;
pub mod catalog;
pub mod config;
pub mod error;
pub mod favorites;
pub mod filter;
pub mod models;

pub use browser::VenueBrowser;
pub use catalog::Catalog;
pub use config::Config;
pub use error::Error;
pub use favorites::FavoriteSet;
pub use filter::{filter, FilterCriteria};

/// Result type alias because typing Result<T, Error> everywhere is tedious
pub type Result<T> = std::result::Result<T, Error>;
