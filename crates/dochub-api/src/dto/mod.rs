//! Request and response DTOs.

pub mod request;
pub mod response;

use dochub_core::error::AppError;
use validator::Validate;

/// Runs derive-based validation, flattening the first failure into the
/// contract error shape.
pub fn validate_request<T: Validate>(req: &T) -> Result<(), AppError> {
    req.validate().map_err(|errors| {
        let message = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(msg) => msg.to_string(),
                    None => format!("Invalid value for field '{field}'"),
                })
            })
            .next()
            .unwrap_or_else(|| "Invalid request".to_string());
        AppError::validation(message)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::request::SignupRequest;

    #[test]
    fn test_invalid_email_is_rejected_with_message() {
        let req = SignupRequest {
            email: "not-an-email".into(),
            username: "alice".into(),
            firstname: "Alice".into(),
            lastname: "Smith".into(),
            password: "correct horse".into(),
        };
        let err = validate_request(&req).unwrap_err();
        assert_eq!(err.message, "Email must be valid");
    }

    #[test]
    fn test_valid_signup_passes() {
        let req = SignupRequest {
            email: "alice@example.com".into(),
            username: "alice".into(),
            firstname: "Alice".into(),
            lastname: "Smith".into(),
            password: "correct horse".into(),
        };
        assert!(validate_request(&req).is_ok());
    }
}
