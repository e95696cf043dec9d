//! Error handling
//!
//! Defines the status taxonomy and error handling for the input layer.

pub mod handlers;
pub mod types;

pub use types::*;
