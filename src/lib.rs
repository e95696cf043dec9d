pub mod config;
pub mod error;
pub mod input;
pub mod utils;

pub use error::{InputError, InputResult, Status};
pub use input::LineReader;
