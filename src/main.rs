//! safe-input - Entry Point
//!
//! Prompts for a name, an age and a height through the bounded readers and
//! reports each outcome.

use log::{info, warn};
use std::io::{self, Write};

use safe_input::config::DemoConfig;
use safe_input::error::handlers::{error_to_code, handle_error};
use safe_input::utils::logging::setup_logging;
use safe_input::input::{read_float, read_int, read_line};
use safe_input::{InputError, InputResult};

fn main() {
    setup_logging();

    let config = DemoConfig::load().unwrap_or_else(|e| {
        warn!("Falling back to default configuration: {}", e);
        DemoConfig::default()
    });
    info!("Starting demo with {:?}", config);

    // Reading a string
    prompt("Enter your name: ");
    let mut name = vec![0u8; config.name_buffer_size];
    match read_line(&mut name) {
        Ok(len) => println!(
            "Hello, {}! ({} chars read)",
            String::from_utf8_lossy(&name[..len]),
            len
        ),
        Err(InputError::BufferOverflow) => println!("Error: Input exceeded buffer size."),
        Err(e) => {
            handle_error(&e);
            println!("Error reading string: {}", error_to_code(&e));
        }
    }

    // Reading an integer
    match with_retries("Enter your age: ", config.max_attempts, read_int) {
        Ok(age) => println!("You are {} years old", age),
        Err(InputError::IntegerOverflow) => println!("Error: Integer value out of range."),
        Err(InputError::ConversionError) => println!("Error: Invalid integer format."),
        Err(e) => {
            handle_error(&e);
            println!("Error reading integer: {}", error_to_code(&e));
        }
    }

    // Reading a double
    match with_retries("Enter your height in meters: ", config.max_attempts, read_float) {
        Ok(height) => println!("You are {:.2} meters tall", height),
        Err(InputError::DoubleOverflow) => println!("Error: Double value out of range."),
        Err(InputError::ConversionError) => println!("Error: Invalid double format."),
        Err(e) => {
            handle_error(&e);
            println!("Error reading double: {}", error_to_code(&e));
        }
    }
}

fn prompt(message: &str) {
    print!("{}", message);
    let _ = io::stdout().flush();
}

/// Show the prompt and read, asking again on malformed input while attempts
/// remain
fn with_retries<T>(
    message: &str,
    attempts: usize,
    mut read: impl FnMut() -> InputResult<T>,
) -> InputResult<T> {
    let mut attempt = 1;
    loop {
        prompt(message);
        match read() {
            Err(InputError::ConversionError) if attempt < attempts => {
                println!("Invalid input, please try again.");
                attempt += 1;
            }
            result => return result,
        }
    }
}
