pub mod branch;
pub mod error;
pub mod utils;
