//! Validation helpers for `helpdesk`.
//!
//! The intake form requires every field and an email-shaped address. The
//! store accepts whatever it is given, so these checks run before
//! `create_ticket` is called and never touch storage.

use helpdesk_lib::{NewTicket, ValidationError};
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Validates the new-ticket form.
pub struct TicketFormValidator;

impl TicketFormValidator {
    /// Validate the form and return all errors found.
    ///
    /// # Errors
    ///
    /// Returns a `Vec<ValidationError>` if any field is blank or the email
    /// is malformed.
    pub fn validate(form: &NewTicket) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        let required = [
            ("userName", &form.user_name),
            ("userEmail", &form.user_email),
            ("department", &form.department),
            ("issueType", &form.issue_type),
            ("description", &form.description),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                errors.push(ValidationError::new(field, "is required"));
            }
        }

        if !form.user_email.trim().is_empty() && !is_valid_email(&form.user_email) {
            errors.push(ValidationError::new(
                "userEmail",
                "must be a valid email address",
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email.trim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use helpdesk_lib::Priority;

    fn valid_form() -> NewTicket {
        NewTicket {
            user_name: "Priya Shah".to_string(),
            user_email: "priya.s@company.com".to_string(),
            department: "Marketing".to_string(),
            issue_type: "Email".to_string(),
            priority: Priority::Medium,
            description: "Outlook keeps asking for my password".to_string(),
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(TicketFormValidator::validate(&valid_form()).is_ok());
    }

    #[test]
    fn test_blank_fields_reported() {
        let form = NewTicket {
            user_name: "   ".to_string(),
            description: String::new(),
            ..valid_form()
        };
        let errors = TicketFormValidator::validate(&form).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["userName", "description"]);
    }

    #[test]
    fn test_bad_email_reported_once() {
        let form = NewTicket {
            user_email: "not-an-address".to_string(),
            ..valid_form()
        };
        let errors = TicketFormValidator::validate(&form).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "userEmail");
    }

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email(" sarah.j@company.com "));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("@company.com"));
    }
}
