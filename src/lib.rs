pub mod config;
pub mod env;
pub mod error;
pub mod executor;

pub use error::{FetchError, FetchResult};
