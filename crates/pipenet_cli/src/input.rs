//! Validated scalar input acquisition.
//!
//! # Responsibility
//! - Prompt for bounded integers, floored reals and non-empty lines,
//!   retrying until the input is valid.
//! - Hand the core already-range-checked values only.
//!
//! # Invariants
//! - A closed input stream surfaces as `ErrorKind::UnexpectedEof`, never as
//!   an infinite retry loop.

use std::io::{self, BufRead, Write};

fn prompt_line(prompt: &str) -> io::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buffer = String::new();
    let read = io::stdin().lock().read_line(&mut buffer)?;
    if read == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input stream closed",
        ));
    }
    Ok(buffer.trim_end_matches(['\r', '\n']).to_string())
}

/// Prompts until a non-empty line is entered.
pub fn read_nonempty_line(prompt: &str) -> io::Result<String> {
    loop {
        let line = prompt_line(prompt)?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            return Ok(trimmed.to_string());
        }
        println!("Input cannot be empty.");
    }
}

/// Prompts until an integer within `[min, max]` is entered.
pub fn read_u32(prompt: &str, min: u32, max: u32) -> io::Result<u32> {
    loop {
        let line = prompt_line(prompt)?;
        match line.trim().parse::<u32>() {
            Ok(value) if value >= min && value <= max => return Ok(value),
            Ok(_) => println!("Value must be between {min} and {max}."),
            Err(_) => println!("Please enter a whole number."),
        }
    }
}

/// Prompts until a positive record ID is entered.
pub fn read_id(prompt: &str) -> io::Result<u64> {
    loop {
        let line = prompt_line(prompt)?;
        match line.trim().parse::<u64>() {
            Ok(value) if value >= 1 => return Ok(value),
            _ => println!("Please enter a positive record ID."),
        }
    }
}

/// Prompts until a real number within `[min, max]` is entered.
pub fn read_f64(prompt: &str, min: f64, max: f64) -> io::Result<f64> {
    loop {
        let line = prompt_line(prompt)?;
        match line.trim().parse::<f64>() {
            Ok(value) if value.is_finite() && value >= min && value <= max => return Ok(value),
            Ok(_) => println!("Value must be between {min} and {max}."),
            Err(_) => println!("Please enter a number."),
        }
    }
}

/// Free-form selection input: comma-separated IDs or `all`.
pub fn read_selection(prompt: &str) -> io::Result<String> {
    read_nonempty_line(prompt)
}
