//! Utilities - error type, result alias, logging, validation

pub mod error;
pub mod logger;
pub mod result;
pub mod validation;

pub use error::AppError;
pub use result::AppResult;
