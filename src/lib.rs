pub mod analyze;
pub mod extract;
pub mod models;
pub mod output;
pub mod storage;

pub use models::*;
