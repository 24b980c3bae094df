use chrono::{DateTime, SecondsFormat, Utc};
use log::{info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::error::FormError;

pub const SUCCESS_MESSAGE: &str =
    "Thank you! Your consultation request has been received. We'll contact you soon.";

/// Whitespace as browsers define it for form input: the `regex` crate's `\s`
/// also matches U+0085 and misses U+FEFF.
const INPUT_WHITESPACE: &str =
    r"\t\n\x0B\x0C\r \u{A0}\u{1680}\u{2000}-\u{200A}\u{2028}\u{2029}\u{202F}\u{205F}\u{3000}\u{FEFF}";

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(r"^[^{ws}@]+@[^{ws}@]+\.[^{ws}@]+$", ws = INPUT_WHITESPACE);
    Regex::new(&pattern).expect("email pattern is valid")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Raw values of the consultation form, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactRequest {
    pub name: String,
    pub company: String,
    pub email: String,
    pub message: String,
}

/// A request that passed validation. Only ever logged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub name: String,
    pub company: String,
    pub email: String,
    pub message: String,
    pub timestamp: String,
}

impl ContactRequest {
    pub fn validate(&self) -> Result<(), FormError> {
        // Whitespace-only values count as filled in.
        let fields = [&self.name, &self.company, &self.email, &self.message];
        if fields.iter().any(|value| value.is_empty()) {
            return Err(FormError::MissingFields);
        }

        if !is_valid_email(&self.email) {
            return Err(FormError::InvalidEmail);
        }

        Ok(())
    }

    pub fn submit_at(self, received_at: DateTime<Utc>) -> Result<Submission, FormError> {
        self.validate()?;

        Ok(Submission {
            name: self.name,
            company: self.company,
            email: self.email,
            message: self.message,
            timestamp: received_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        })
    }

    pub fn submit(self) -> Result<Submission, FormError> {
        self.submit_at(Utc::now())
    }
}

impl Submission {
    /// There is no backend; the console is the only place a submission goes.
    pub fn log(&self) {
        match serde_json::to_string(self) {
            Ok(body) => info!(target: "contact", "Form Submission: {}", body),
            Err(e) => warn!(target: "contact", "Failed to serialize submission: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn filled() -> ContactRequest {
        ContactRequest {
            name: "Jane".to_string(),
            company: "Acme".to_string(),
            email: "jane@acme.com".to_string(),
            message: "Hello".to_string(),
        }
    }

    #[test]
    fn any_empty_field_is_rejected() {
        let blankers: [fn(&mut ContactRequest); 4] = [
            |r| r.name.clear(),
            |r| r.company.clear(),
            |r| r.email.clear(),
            |r| r.message.clear(),
        ];

        for blank in blankers {
            let mut request = filled();
            blank(&mut request);
            assert_eq!(request.clone().submit(), Err(FormError::MissingFields));
            assert_eq!(
                FormError::MissingFields.to_string(),
                "Please fill in all fields"
            );
        }
    }

    #[test]
    fn missing_fields_wins_over_bad_email() {
        let request = ContactRequest {
            email: "not-an-email".to_string(),
            message: String::new(),
            ..filled()
        };
        assert_eq!(request.validate(), Err(FormError::MissingFields));
    }

    #[test]
    fn whitespace_only_fields_count_as_filled() {
        let request = ContactRequest {
            name: "   ".to_string(),
            message: "\n".to_string(),
            ..filled()
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for email in [
            "plainaddress",
            "jane@acme",
            "@acme.com",
            "jane@.com",
            "jane@acme.",
            "jane doe@acme.com",
            "jane@ac me.com",
            "jane@@acme.com",
            "jane@acme@corp.com",
            "jane\u{FEFF}@acme.com",
            "jane@acme.co\u{A0}m",
            "jane@acme.com\u{3000}",
        ] {
            let request = ContactRequest { email: email.to_string(), ..filled() };
            assert_eq!(request.validate(), Err(FormError::InvalidEmail), "{email}");
        }
        assert_eq!(
            FormError::InvalidEmail.to_string(),
            "Please enter a valid email address"
        );
    }

    #[test]
    fn permissive_emails_are_accepted() {
        for email in [
            "jane@acme.com",
            "a@b.c",
            "first.last@mail.acme.co.uk",
            "x+tag@d.io",
            "jane\u{85}@acme.com",
        ] {
            assert!(is_valid_email(email), "{email}");
        }
    }

    #[test]
    fn successful_submission_carries_fields_and_timestamp() {
        let at = Utc.with_ymd_and_hms(2024, 3, 5, 14, 7, 9).unwrap();
        let submission = filled().submit_at(at).unwrap();

        assert_eq!(submission.name, "Jane");
        assert_eq!(submission.company, "Acme");
        assert_eq!(submission.email, "jane@acme.com");
        assert_eq!(submission.message, "Hello");
        assert_eq!(submission.timestamp, "2024-03-05T14:07:09.000Z");
    }

    #[test]
    fn submission_serializes_all_fields() {
        let at = Utc.with_ymd_and_hms(2024, 3, 5, 14, 7, 9).unwrap();
        let value = serde_json::to_value(filled().submit_at(at).unwrap()).unwrap();

        assert_eq!(value["name"], "Jane");
        assert_eq!(value["company"], "Acme");
        assert_eq!(value["email"], "jane@acme.com");
        assert_eq!(value["message"], "Hello");
        assert_eq!(value["timestamp"], "2024-03-05T14:07:09.000Z");
    }
}
