//! # Validation Module
//!
//! Form-input validation for the owner area (menu management, registration,
//! login). Runs before anything reaches a gateway, so obviously bad input
//! never costs a round trip.
//!
//! ## Usage
//! ```rust
//! use matjip_core::validation::{validate_dish_name, validate_quantity};
//!
//! validate_dish_name("김치찌개").unwrap();
//! validate_quantity(3).unwrap();
//! ```

use crate::error::{ValidationError, ValidationResult};

// =============================================================================
// String Validators
// =============================================================================

/// Validates a dish name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 100 characters
pub fn validate_dish_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > 100 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 100,
        });
    }

    Ok(())
}

/// Validates a dish description.
///
/// ## Rules
/// - May be empty
/// - Must be at most 500 characters
pub fn validate_dish_description(description: &str) -> ValidationResult<()> {
    if description.chars().count() > 500 {
        return Err(ValidationError::TooLong {
            field: "description".to_string(),
            max: 500,
        });
    }

    Ok(())
}

/// Validates an owner-account username.
///
/// ## Rules
/// - 4 to 20 characters
/// - Lowercase ASCII letters, digits, and underscores only
pub fn validate_username(username: &str) -> ValidationResult<()> {
    let username = username.trim();

    if username.is_empty() {
        return Err(ValidationError::Required {
            field: "username".to_string(),
        });
    }

    if username.len() < 4 {
        return Err(ValidationError::TooShort {
            field: "username".to_string(),
            min: 4,
        });
    }

    if username.len() > 20 {
        return Err(ValidationError::TooLong {
            field: "username".to_string(),
            max: 20,
        });
    }

    if !username
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "username".to_string(),
            reason: "must contain only lowercase letters, digits, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates an owner-account password.
///
/// ## Rules
/// - 8 to 72 characters
pub fn validate_password(password: &str) -> ValidationResult<()> {
    if password.is_empty() {
        return Err(ValidationError::Required {
            field: "password".to_string(),
        });
    }

    if password.len() < 8 {
        return Err(ValidationError::TooShort {
            field: "password".to_string(),
            min: 8,
        });
    }

    if password.len() > 72 {
        return Err(ValidationError::TooLong {
            field: "password".to_string(),
            max: 72,
        });
    }

    Ok(())
}

/// Validates a Korean phone number.
///
/// ## Rules
/// - After stripping hyphens and spaces: 10 or 11 digits, starting with 0
///
/// ## Returns
/// The cleaned digit string.
pub fn validate_phone(phone: &str) -> ValidationResult<String> {
    let cleaned: String = phone
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();

    if cleaned.is_empty() {
        return Err(ValidationError::Required {
            field: "phone".to_string(),
        });
    }

    let well_formed = (cleaned.len() == 10 || cleaned.len() == 11)
        && cleaned.starts_with('0')
        && cleaned.bytes().all(|b| b.is_ascii_digit());

    if !well_formed {
        return Err(ValidationError::InvalidFormat {
            field: "phone".to_string(),
            reason: "must be 10 or 11 digits starting with 0".to_string(),
        });
    }

    Ok(cleaned)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a line quantity.
///
/// ## Rules
/// - Must be positive (> 0)
///
/// The cart itself puts no upper bound on quantity; if the page layer wants
/// a cap, it enforces one on top of this check.
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a price in whole won.
///
/// ## Rules
/// - Must be non-negative (>= 0); zero is allowed (service items)
pub fn validate_price_won(won: i64) -> ValidationResult<()> {
    if won < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_dish_name() {
        assert!(validate_dish_name("김치찌개").is_ok());
        assert!(validate_dish_name("  불고기  ").is_ok());

        assert!(validate_dish_name("").is_err());
        assert!(validate_dish_name("   ").is_err());
        assert!(validate_dish_name(&"가".repeat(101)).is_err());
    }

    #[test]
    fn test_validate_dish_description() {
        assert!(validate_dish_description("").is_ok());
        assert!(validate_dish_description("구수한 된장찌개").is_ok());
        assert!(validate_dish_description(&"가".repeat(501)).is_err());
    }

    #[test]
    fn test_validate_username() {
        assert!(validate_username("demo").is_ok());
        assert!(validate_username("owner_01").is_ok());

        assert!(validate_username("").is_err());
        assert!(validate_username("abc").is_err());
        assert!(validate_username("Demo").is_err());
        assert!(validate_username("has space").is_err());
        assert!(validate_username(&"a".repeat(21)).is_err());
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("demo1234").is_ok());

        assert!(validate_password("").is_err());
        assert!(validate_password("short").is_err());
        assert!(validate_password(&"a".repeat(73)).is_err());
    }

    #[test]
    fn test_validate_phone() {
        assert_eq!(validate_phone("010-1234-5678").unwrap(), "01012345678");
        assert_eq!(validate_phone("02 1234 5678").unwrap(), "0212345678");

        assert!(validate_phone("").is_err());
        assert!(validate_phone("123-4567").is_err());
        assert!(validate_phone("111-1234-5678").is_err());
        assert!(validate_phone("010-12c4-5678").is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
    }

    #[test]
    fn test_validate_price_won() {
        assert!(validate_price_won(0).is_ok());
        assert!(validate_price_won(8000).is_ok());
        assert!(validate_price_won(-100).is_err());
    }
}
