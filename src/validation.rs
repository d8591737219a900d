//! Field validation for the contact form.

use std::sync::OnceLock;

use regex::Regex;

use crate::constants::form as limits;
use crate::lang::{strings, Language};

/// Validation result with a user-facing error message.
pub type ValidationResult = Result<(), String>;

fn name_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Letters (accented included) and spaces only.
    RE.get_or_init(|| Regex::new(r"^[\p{L} ]+$").expect("name regex"))
}

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // local@domain.tld shape, no whitespace or extra '@'.
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"))
}

fn phone_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9+\-() ]+$").expect("phone regex"))
}

/// Validates the name field: 2-50 characters, letters and spaces only.
pub fn validate_name(value: &str, lang: Language) -> ValidationResult {
    let value = value.trim();
    let len = value.chars().count();
    if len < limits::NAME_MIN || len > limits::NAME_MAX || !name_re().is_match(value) {
        return Err(strings(lang).err_name.to_string());
    }
    Ok(())
}

/// Validates the email field: local@domain.tld shape, at most 100 characters.
pub fn validate_email(value: &str, lang: Language) -> ValidationResult {
    let value = value.trim();
    if value.chars().count() > limits::EMAIL_MAX || !email_re().is_match(value) {
        return Err(strings(lang).err_email.to_string());
    }
    Ok(())
}

/// Validates the phone field: 9-20 characters from digits, +, -, (), space.
pub fn validate_phone(value: &str, lang: Language) -> ValidationResult {
    let value = value.trim();
    let len = value.chars().count();
    if len < limits::PHONE_MIN || len > limits::PHONE_MAX || !phone_re().is_match(value) {
        return Err(strings(lang).err_phone.to_string());
    }
    Ok(())
}

/// Validates the event type: a selection must be present.
pub fn validate_event_type(selection: Option<usize>, lang: Language) -> ValidationResult {
    match selection {
        Some(_) => Ok(()),
        None => Err(strings(lang).err_event_type.to_string()),
    }
}

/// Validates the message field: 10-500 characters.
pub fn validate_message(value: &str, lang: Language) -> ValidationResult {
    let len = value.chars().count();
    if len < limits::MESSAGE_MIN {
        return Err(strings(lang).err_message_short.to_string());
    }
    if len > limits::MESSAGE_MAX {
        return Err(strings(lang).err_message_long.to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ES: Language = Language::Es;

    #[test]
    fn test_valid_names() {
        assert!(validate_name("Ana", ES).is_ok());
        assert!(validate_name("José María Pérez", ES).is_ok());
        assert!(validate_name("Ñoño Güemes", ES).is_ok());
        assert!(validate_name("Al", ES).is_ok()); // Exactly 2 characters
    }

    #[test]
    fn test_invalid_names() {
        assert!(validate_name("", ES).is_err());
        assert!(validate_name("A", ES).is_err()); // Too short
        assert!(validate_name("Ana123", ES).is_err()); // Digits
        assert!(validate_name("ana@mail", ES).is_err()); // Symbols
        assert!(validate_name(&"a".repeat(51), ES).is_err()); // Too long
        assert!(validate_name(&"a".repeat(50), ES).is_ok());
    }

    #[test]
    fn test_valid_emails() {
        assert!(validate_email("ana@example.com", ES).is_ok());
        assert!(validate_email("jose.maria@eventos.mx", ES).is_ok());
    }

    #[test]
    fn test_invalid_emails() {
        assert!(validate_email("", ES).is_err());
        assert!(validate_email("ana", ES).is_err());
        assert!(validate_email("ana@example", ES).is_err()); // No TLD
        assert!(validate_email("ana @example.com", ES).is_err()); // Space
        assert!(validate_email("ana@@example.com", ES).is_err());
    }

    #[test]
    fn test_email_length_limit() {
        let local = "a".repeat(95);
        let email = format!("{local}@e.co"); // 100 characters
        assert_eq!(email.chars().count(), 100);
        assert!(validate_email(&email, ES).is_ok());
        let email = format!("a{email}");
        assert!(validate_email(&email, ES).is_err());
    }

    #[test]
    fn test_valid_phones() {
        assert!(validate_phone("612345678", ES).is_ok());
        assert!(validate_phone("+34 612 345 678", ES).is_ok());
        assert!(validate_phone("(55) 1234-5678", ES).is_ok());
    }

    #[test]
    fn test_invalid_phones() {
        assert!(validate_phone("", ES).is_err());
        assert!(validate_phone("12345678", ES).is_err()); // 8 characters
        assert!(validate_phone("612345678x", ES).is_err()); // Letter
        assert!(validate_phone(&"1".repeat(21), ES).is_err()); // Too long
        assert!(validate_phone(&"1".repeat(20), ES).is_ok());
    }

    #[test]
    fn test_event_type_selection() {
        assert!(validate_event_type(Some(0), ES).is_ok());
        assert!(validate_event_type(None, ES).is_err());
    }

    #[test]
    fn test_message_length_bounds() {
        assert!(validate_message(&"a".repeat(9), ES).is_err());
        assert!(validate_message(&"a".repeat(10), ES).is_ok());
        assert!(validate_message(&"a".repeat(500), ES).is_ok());
        assert!(validate_message(&"a".repeat(501), ES).is_err());
    }

    #[test]
    fn test_messages_are_localized() {
        let es = validate_message("corto", Language::Es).unwrap_err();
        let en = validate_message("short", Language::En).unwrap_err();
        assert_ne!(es, en);
    }
}
