pub mod error;
pub mod logger;
pub mod numbers;
pub mod validation;
