pub mod fortune;
pub mod history;
pub mod prize;
pub mod reveal;

pub use fortune::*;
pub use history::*;
pub use prize::*;
pub use reveal::*;
