pub mod error;
pub mod relaxation;
pub mod types;
