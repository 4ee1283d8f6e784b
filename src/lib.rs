pub mod catalog;
pub mod config;
pub mod error;
pub mod external;
pub mod models;
pub mod services;
pub mod storage;

pub use config::Config;
pub use error::{AppError, AppResult};
