//! Interactive input collection and input-boundary validation.
//!
//! All validation of user-entered values happens here, before anything
//! reaches storage: bad values are reported and replaced with a default
//! rather than aborting the command.

use std::io::{self, Write};

use chrono::NaiveDate;
use colored::*;

use taskmgr::task::Priority;

/// Prompt for a line of input. An empty answer returns the default when one
/// is given, otherwise the empty string.
pub fn get_user_input(label: &str, default: Option<&str>) -> io::Result<String> {
    match default {
        Some(d) if !d.is_empty() => print!("{} [{}]: ", label, d),
        _ => print!("{}: ", label),
    }
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    let answer = line.trim();

    if answer.is_empty() {
        Ok(default.unwrap_or("").to_string())
    } else {
        Ok(answer.to_string())
    }
}

/// Check a YYYY-MM-DD date string.
pub fn validate_date(date: &str) -> bool {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok()
}

/// Validate a due-date answer: an empty answer means no due date, an
/// invalid one is reported and dropped in favor of the fallback.
pub fn resolve_due_date(answer: &str, fallback: Option<String>) -> Option<String> {
    if answer.is_empty() {
        return fallback;
    }
    if validate_date(answer) {
        Some(answer.to_string())
    } else {
        println!("{}", "Invalid date, expected YYYY-MM-DD. Keeping previous value.".yellow());
        fallback
    }
}

/// Validate a priority answer: anything that is not 1, 2, or 3 is reported
/// and replaced by the fallback.
pub fn resolve_priority(answer: &str, fallback: Priority) -> Priority {
    if answer.is_empty() {
        return fallback;
    }
    match answer.parse::<u8>().ok().and_then(Priority::from_u8) {
        Some(priority) => priority,
        None => {
            println!(
                "{}",
                format!("Priority must be 1, 2, or 3. Using {}.", fallback.as_u8()).yellow()
            );
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_date() {
        assert!(validate_date("2026-08-23"));
        assert!(validate_date("2026-12-31"));
        assert!(!validate_date("2026-13-01"));
        assert!(!validate_date("23-08-2026"));
        assert!(!validate_date("next tuesday"));
        assert!(!validate_date(""));
    }

    #[test]
    fn test_resolve_due_date_empty_keeps_fallback() {
        assert_eq!(resolve_due_date("", None), None);
        assert_eq!(
            resolve_due_date("", Some("2026-09-01".to_string())),
            Some("2026-09-01".to_string())
        );
    }

    #[test]
    fn test_resolve_due_date_valid_replaces() {
        assert_eq!(
            resolve_due_date("2026-10-05", Some("2026-09-01".to_string())),
            Some("2026-10-05".to_string())
        );
    }

    #[test]
    fn test_resolve_due_date_invalid_falls_back() {
        assert_eq!(
            resolve_due_date("soon", Some("2026-09-01".to_string())),
            Some("2026-09-01".to_string())
        );
        assert_eq!(resolve_due_date("soon", None), None);
    }

    #[test]
    fn test_resolve_priority() {
        assert_eq!(resolve_priority("2", Priority::Low), Priority::Medium);
        assert_eq!(resolve_priority("", Priority::High), Priority::High);
        assert_eq!(resolve_priority("7", Priority::Low), Priority::Low);
        assert_eq!(resolve_priority("high", Priority::Medium), Priority::Medium);
    }
}
