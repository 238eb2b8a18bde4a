//! # Business Registration Number Module
//!
//! Formatting, cleaning, and checksum validation for the 10-digit Korean
//! business registration number (사업자등록번호).
//!
//! ## Checksum
//! ```text
//! digits:   d0  d1  d2 - d3  d4 - d5  d6  d7  d8 | d9 (check digit)
//! weights:   1   3   7    1   3    7   1   3   5
//!
//! sum  = Σ d[i] × w[i]            for i in 0..9
//! sum += (d8 × 5) / 10            integer floor; second carry of the
//!                                 weight-5 digit
//! valid ⇔ (10 - sum mod 10) mod 10 == d9
//! ```
//!
//! Everything here is a pure function: no I/O, no state, no locale
//! dependence. The remote NTS lookup lives in `matjip-api`; this module is
//! the local precheck that runs before any request is worth sending.

use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Digit count of a complete business registration number.
pub const BUSINESS_NUMBER_LEN: usize = 10;

/// Checksum weights applied to the first nine digits.
const CHECK_WEIGHTS: [u32; 9] = [1, 3, 7, 1, 3, 7, 1, 3, 5];

// =============================================================================
// Pure Function Suite
// =============================================================================

/// Formats raw input as `XXX-XX-XXXXX`, partially for partial input.
///
/// Strips every non-digit character, truncates to 10 digits, then inserts
/// hyphens after the third and fifth digit.
///
/// ## Example
/// ```rust
/// use matjip_core::bizno::format_business_number;
///
/// assert_eq!(format_business_number("1234567890"), "123-45-67890");
/// assert_eq!(format_business_number("12345"), "123-45");
/// assert_eq!(format_business_number("12"), "12");
/// assert_eq!(format_business_number("123-45-67890123"), "123-45-67890");
/// ```
pub fn format_business_number(raw: &str) -> String {
    let digits: String = raw
        .chars()
        .filter(char::is_ascii_digit)
        .take(BUSINESS_NUMBER_LEN)
        .collect();

    match digits.len() {
        0..=3 => digits,
        4..=5 => format!("{}-{}", &digits[..3], &digits[3..]),
        _ => format!("{}-{}-{}", &digits[..3], &digits[3..5], &digits[5..]),
    }
}

/// Removes the display hyphens, returning the raw digit string.
///
/// ## Example
/// ```rust
/// use matjip_core::bizno::clean_business_number;
///
/// assert_eq!(clean_business_number("123-45-67890"), "1234567890");
/// ```
pub fn clean_business_number(formatted: &str) -> String {
    formatted.replace('-', "")
}

/// Checksum-validates a business registration number.
///
/// Accepts raw or hyphen-formatted input. Returns `false` unless the cleaned
/// input is exactly 10 ASCII digits whose check digit matches the weighted
/// checksum.
///
/// ## Example
/// ```rust
/// use matjip_core::bizno::validate_business_number;
///
/// assert!(validate_business_number("123-45-67891"));
/// assert!(!validate_business_number("123-45-67890"));
/// assert!(!validate_business_number("12345"));
/// ```
pub fn validate_business_number(input: &str) -> bool {
    let cleaned = clean_business_number(input);
    if cleaned.len() != BUSINESS_NUMBER_LEN || !cleaned.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let digits: Vec<u32> = cleaned.bytes().map(|b| u32::from(b - b'0')).collect();

    let mut sum: u32 = digits[..9]
        .iter()
        .zip(CHECK_WEIGHTS)
        .map(|(digit, weight)| digit * weight)
        .sum();
    sum += digits[8] * 5 / 10;

    (10 - sum % 10) % 10 == digits[9]
}

// =============================================================================
// BusinessNumber Type
// =============================================================================

/// A checksum-validated business registration number.
///
/// Holds the raw 10-digit form; [`fmt::Display`] renders the hyphenated
/// display form. Constructing one through [`BusinessNumber::parse`] is the
/// only way, so a held value is always well-formed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BusinessNumber(String);

impl BusinessNumber {
    /// Parses raw or hyphen-formatted input into a validated number.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        if validate_business_number(input) {
            Ok(BusinessNumber(clean_business_number(input)))
        } else {
            Err(ValidationError::InvalidFormat {
                field: "businessNumber".to_string(),
                reason: "must be 10 digits with a valid check digit".to_string(),
            })
        }
    }

    /// Returns the raw 10-digit form.
    pub fn digits(&self) -> &str {
        &self.0
    }

    /// Returns the `XXX-XX-XXXXX` display form.
    pub fn formatted(&self) -> String {
        format_business_number(&self.0)
    }
}

impl fmt::Display for BusinessNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl FromStr for BusinessNumber {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BusinessNumber::parse(s)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_full_number() {
        assert_eq!(format_business_number("1234567890"), "123-45-67890");
    }

    #[test]
    fn test_format_partial_input() {
        assert_eq!(format_business_number(""), "");
        assert_eq!(format_business_number("1"), "1");
        assert_eq!(format_business_number("123"), "123");
        assert_eq!(format_business_number("1234"), "123-4");
        assert_eq!(format_business_number("12345"), "123-45");
        assert_eq!(format_business_number("123456"), "123-45-6");
    }

    #[test]
    fn test_format_strips_noise_and_truncates() {
        assert_eq!(format_business_number("123-45-67890"), "123-45-67890");
        assert_eq!(format_business_number(" 123 45 67890 99"), "123-45-67890");
        assert_eq!(format_business_number("abc123def45"), "123-45");
    }

    #[test]
    fn test_clean() {
        assert_eq!(clean_business_number("123-45-67890"), "1234567890");
        assert_eq!(clean_business_number("1234567890"), "1234567890");
    }

    #[test]
    fn test_validate_known_valid_numbers() {
        // 123456789 → weighted sum 165, carry 4, check digit 1
        assert!(validate_business_number("1234567891"));
        assert!(validate_business_number("123-45-67891"));
        // 124810099 → weighted sum 118, carry 4, check digit 8
        assert!(validate_business_number("124-81-00998"));
    }

    #[test]
    fn test_validate_rejects_altered_check_digit() {
        for check in 0..10 {
            let candidate = format!("123456789{}", check);
            assert_eq!(validate_business_number(&candidate), check == 1);
        }
    }

    #[test]
    fn test_validate_rejects_wrong_length() {
        assert!(!validate_business_number(""));
        assert!(!validate_business_number("12345"));
        assert!(!validate_business_number("12345678901"));
    }

    #[test]
    fn test_validate_rejects_non_digits() {
        assert!(!validate_business_number("12345abc91"));
        assert!(!validate_business_number("123 456789"));
    }

    #[test]
    fn test_business_number_parse() {
        let number = BusinessNumber::parse("123-45-67891").unwrap();
        assert_eq!(number.digits(), "1234567891");
        assert_eq!(number.formatted(), "123-45-67891");
        assert_eq!(number.to_string(), "123-45-67891");

        assert!(BusinessNumber::parse("123-45-67890").is_err());
        assert!("1248100998".parse::<BusinessNumber>().is_ok());
    }
}
