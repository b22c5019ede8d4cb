//! Transient page-level notifications
//!
//! Every page surfaces failures the same way: one printed line, never a
//! crash, never an automatic retry. Backend detail text is shown verbatim.

use crate::utils::errors::{ApiErrorKind, EventPassError};

/// Print a one-line notice
pub fn notice(message: &str) {
    println!("• {message}");
}

/// Print a one-line failure notification
pub fn failure(err: &EventPassError) {
    eprintln!("✗ {}", display_message(err));
}

/// Print a one-line local validation problem
pub fn problem(message: &str) {
    eprintln!("✗ {message}");
}

/// The user-facing text for an error
pub fn display_message(err: &EventPassError) -> String {
    match err {
        EventPassError::NoSession => {
            "You are not logged in — run `eventpass login` first".to_string()
        }
        EventPassError::Api(api) => match api.kind {
            ApiErrorKind::Network => format!("Connection error: {}", api.message),
            _ => api.message.clone(),
        },
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::errors::ApiError;

    #[test]
    fn test_backend_detail_shown_verbatim() {
        let err: EventPassError =
            ApiError::new(ApiErrorKind::Validation, "Нет свободных мест").into();
        assert_eq!(display_message(&err), "Нет свободных мест");
    }

    #[test]
    fn test_network_errors_get_a_generic_prefix() {
        let err: EventPassError = ApiError::network("could not reach the backend").into();
        assert_eq!(
            display_message(&err),
            "Connection error: could not reach the backend"
        );
    }

    #[test]
    fn test_missing_session_points_at_login() {
        assert!(display_message(&EventPassError::NoSession).contains("eventpass login"));
    }
}
