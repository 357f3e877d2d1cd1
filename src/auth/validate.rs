use lazy_static::lazy_static;
use regex::Regex;

use crate::auth::dto::{Credentials, CredentialsPayload, FieldError};

/// Passwords shorter than this are rejected outright. There is no upper
/// bound on the server; the UI caps input length on its own.
pub const PASSWORD_MIN_LEN: usize = 6;

fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Normalize and validate raw credentials.
///
/// Runs strictly before any store or crypto work; failures are collected
/// per field so a client can highlight the offending input.
pub fn validate(payload: CredentialsPayload) -> Result<Credentials, Vec<FieldError>> {
    let email = payload.email.trim().to_lowercase();
    let mut errors = Vec::new();

    if !is_valid_email(&email) {
        errors.push(FieldError {
            field: "email",
            message: "invalid email format".into(),
        });
    }
    if payload.password.len() < PASSWORD_MIN_LEN {
        errors.push(FieldError {
            field: "password",
            message: format!("password must be at least {} characters", PASSWORD_MIN_LEN),
        });
    }

    if errors.is_empty() {
        Ok(Credentials {
            email,
            password: payload.password,
        })
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(email: &str, password: &str) -> CredentialsPayload {
        CredentialsPayload {
            email: email.into(),
            password: password.into(),
        }
    }

    #[test]
    fn accepts_valid_credentials() {
        let creds = validate(payload("a@b.com", "secret1")).expect("valid credentials");
        assert_eq!(creds.email, "a@b.com");
        assert_eq!(creds.password, "secret1");
    }

    #[test]
    fn normalizes_email_case_and_whitespace() {
        let creds = validate(payload("  User@Example.COM ", "secret1")).expect("valid credentials");
        assert_eq!(creds.email, "user@example.com");
    }

    #[test]
    fn rejects_malformed_email() {
        let errors = validate(payload("not-an-email", "secret1")).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "email");
    }

    #[test]
    fn rejects_short_password() {
        let errors = validate(payload("a@b.com", "short")).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "password");
    }

    #[test]
    fn accepts_six_character_password() {
        assert!(validate(payload("a@b.com", "sixsix")).is_ok());
    }

    #[test]
    fn collects_failures_for_every_field() {
        let errors = validate(payload("nope", "no")).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["email", "password"]);
    }
}
