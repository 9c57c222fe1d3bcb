/// Shared kernel: error types, the Result alias and filesystem safety checks
pub mod error;
pub mod result;
pub mod security;

pub use result::Result;
