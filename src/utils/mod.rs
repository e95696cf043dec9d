//! Utility functions
//!
//! Provides logging setup for the demo binary.

pub mod logging;
