pub mod fortune_service;
pub mod history_service;
pub mod reveal_service;

pub use fortune_service::*;
pub use history_service::*;
pub use reveal_service::*;
