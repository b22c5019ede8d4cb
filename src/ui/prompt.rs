//! Interactive line prompts

use std::io::{BufRead, Write};

use crate::utils::errors::Result;

/// Ask for one line of input
pub fn line(label: &str) -> Result<String> {
    print!("{label}: ");
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    Ok(answer.trim().to_string())
}

/// Ask a yes/no question, defaulting to no
pub fn confirm(label: &str) -> Result<bool> {
    let answer = line(&format!("{label} [y/N]"))?;
    Ok(matches!(answer.to_lowercase().as_str(), "y" | "yes"))
}

/// Use the provided value or fall back to prompting for it
pub fn or_ask(value: Option<String>, label: &str) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None => line(label),
    }
}
