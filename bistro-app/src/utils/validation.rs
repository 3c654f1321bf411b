//! Input validation helpers
//!
//! Centralized text length constants and validation functions for the
//! order and reservation forms and the admin editors.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use shared::error::{AppError, ErrorCode};
use shared::AppResult;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: dish, category
pub const MAX_NAME_LEN: usize = 200;

/// Customer names on orders and reservations
pub const MIN_CUSTOMER_NAME_LEN: usize = 2;

/// Descriptions
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// URLs / image paths
pub const MAX_URL_LEN: usize = 2048;

/// Phone numbers: digits plus separators
pub const MIN_PHONE_LEN: usize = 8;
pub const MAX_PHONE_LEN: usize = 15;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(value: &Option<String>, field: &str, max_len: usize) -> AppResult<()> {
    if let Some(v) = value {
        if v.len() > max_len {
            return Err(AppError::validation(format!(
                "{field} is too long ({} chars, max {max_len})",
                v.len()
            )));
        }
    }
    Ok(())
}

/// Validate a customer name (non-empty, at least two characters after trim).
pub fn validate_customer_name(value: &str) -> AppResult<()> {
    validate_required_text(value, "name", MAX_NAME_LEN)?;
    if value.trim().chars().count() < MIN_CUSTOMER_NAME_LEN {
        return Err(AppError::validation(format!(
            "name must be at least {MIN_CUSTOMER_NAME_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate a phone number
///
/// Accepts digits, `+`, spaces and hyphens; 8 to 15 characters.
pub fn validate_phone(value: &str) -> AppResult<()> {
    let value = value.trim();
    let valid_chars = value
        .chars()
        .all(|c| c.is_ascii_digit() || c == '+' || c == ' ' || c == '-');
    if !valid_chars || value.len() < MIN_PHONE_LEN || value.len() > MAX_PHONE_LEN {
        return Err(AppError::with_message(
            ErrorCode::InvalidFormat,
            "phone must be 8-15 characters of digits, +, spaces or hyphens",
        ));
    }
    Ok(())
}

/// Validate an email address
///
/// Minimal shape check: one `@` with non-empty local part and a domain
/// containing a dot.
pub fn validate_email(value: &str) -> AppResult<()> {
    let value = value.trim();
    if value.is_empty() || value.len() > MAX_EMAIL_LEN {
        return Err(AppError::with_message(
            ErrorCode::InvalidFormat,
            "email is empty or too long",
        ));
    }
    let mut parts = value.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();
    if local.is_empty() || domain.is_empty() || !domain.contains('.') {
        return Err(AppError::with_message(
            ErrorCode::InvalidFormat,
            "email address is not valid",
        ));
    }
    Ok(())
}

/// Validate that a reservation date is today or later.
pub fn validate_not_past(date: NaiveDate, today: NaiveDate) -> AppResult<()> {
    if date < today {
        return Err(AppError::with_message(
            ErrorCode::ReservationDateInPast,
            "Reservation date cannot be in the past",
        ));
    }
    Ok(())
}

/// Validate a reservation party size against the configured cap.
pub fn validate_party_size(number_of_people: u32, max: u32) -> AppResult<()> {
    if number_of_people < 1 || number_of_people > max {
        return Err(AppError::with_message(
            ErrorCode::ReservationPartySize,
            format!("Party size must be between 1 and {max}"),
        ));
    }
    Ok(())
}

/// Validate a dish price (must not be negative).
pub fn validate_price(price: Decimal) -> AppResult<()> {
    if price < Decimal::ZERO {
        return Err(AppError::with_message(
            ErrorCode::DishInvalidPrice,
            "Price must not be negative",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text() {
        assert!(validate_required_text("Tarte", "name", MAX_NAME_LEN).is_ok());
        assert!(validate_required_text("   ", "name", MAX_NAME_LEN).is_err());
        assert!(validate_required_text(&"x".repeat(201), "name", MAX_NAME_LEN).is_err());
    }

    #[test]
    fn test_customer_name() {
        assert!(validate_customer_name("Jo").is_ok());
        assert!(validate_customer_name("J").is_err());
        assert!(validate_customer_name(" J ").is_err());
    }

    #[test]
    fn test_phone() {
        assert!(validate_phone("+33 6 12 34 56").is_ok());
        assert!(validate_phone("0612345678").is_ok());
        assert!(validate_phone("06-12-34-56-78").is_ok());
        // Too short
        assert!(validate_phone("0612345").is_err());
        // Too long
        assert!(validate_phone("0123456789012345").is_err());
        // Letters
        assert!(validate_phone("06abc45678").is_err());
    }

    #[test]
    fn test_email() {
        assert!(validate_email("marie@example.com").is_ok());
        assert!(validate_email("marie").is_err());
        assert!(validate_email("marie@").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("marie@localhost").is_err());
    }

    #[test]
    fn test_dates() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        assert!(validate_not_past(today, today).is_ok());
        assert!(validate_not_past(today.succ_opt().unwrap(), today).is_ok());
        assert_eq!(
            validate_not_past(today.pred_opt().unwrap(), today)
                .unwrap_err()
                .code,
            ErrorCode::ReservationDateInPast
        );
    }

    #[test]
    fn test_party_size() {
        assert!(validate_party_size(1, 20).is_ok());
        assert!(validate_party_size(20, 20).is_ok());
        assert!(validate_party_size(0, 20).is_err());
        assert!(validate_party_size(21, 20).is_err());
    }

    #[test]
    fn test_price() {
        assert!(validate_price(Decimal::ZERO).is_ok());
        assert!(validate_price(Decimal::from(-1)).is_err());
    }
}
