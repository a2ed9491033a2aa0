pub mod config;
pub mod types;
pub mod utils;

pub use self::config::*;
pub use self::types::*;
pub use self::utils::*;
