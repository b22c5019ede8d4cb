//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the application.

use chrono::{Local, NaiveDate};

/// Today's date in the local timezone, used for upcoming/past splits
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Truncate text to a maximum length with ellipsis
pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_length.saturating_sub(3)).collect();
        format!("{cut}...")
    }
}
