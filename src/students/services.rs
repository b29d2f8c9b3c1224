use lazy_static::lazy_static;
use regex::Regex;

use crate::error::AppError;

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// The identity provider's user id, trimmed. Missing or blank is a 400.
pub fn require_student_id(id: Option<String>) -> Result<String, AppError> {
    id.map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::validation("Missing clerk_user_id"))
}

/// Lowercased email, or a validation error if it is malformed.
pub fn normalize_email(email: Option<String>) -> Result<Option<String>, AppError> {
    match email.map(|e| e.trim().to_lowercase()).filter(|e| !e.is_empty()) {
        Some(e) if !is_valid_email(&e) => Err(AppError::validation("Invalid email")),
        other => Ok(other),
    }
}
