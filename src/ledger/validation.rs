//! Input validation for payer identifiers
//!
//! The field is private to force validation through the public API.

use std::fmt;

/// Validation errors for inbound notification fields
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ValidationError {
    #[error("Invalid length for {field}: expected {expected}, got {actual}")]
    InvalidLength {
        field: &'static str,
        expected: &'static str,
        actual: usize,
    },

    #[error("Invalid format for {field}: '{value}' (expected: {expected})")]
    InvalidFormat {
        field: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Validated payer INN (guaranteed 10 or 12 ASCII digits)
///
/// The ledger treats the INN as an opaque unique key; this type only
/// guarantees the wire format is one of the two legal lengths.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Inn(String);

impl Inn {
    /// Create a new validated Inn
    ///
    /// # Validation Rules
    /// - Length: exactly 10 or 12 characters (after trimming)
    /// - ASCII digits only
    ///
    /// # Errors
    /// Returns `ValidationError` if validation fails
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let raw = raw.trim();

        if raw.len() != 10 && raw.len() != 12 {
            return Err(ValidationError::InvalidLength {
                field: "payer_inn",
                expected: "10 or 12 digits",
                actual: raw.len(),
            });
        }

        if !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::InvalidFormat {
                field: "payer_inn",
                value: raw.to_string(),
                expected: "ASCII digits only",
            });
        }

        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Inn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_10_digit_inn() {
        let inn = Inn::new("1234567890").unwrap();
        assert_eq!(inn.as_str(), "1234567890");
    }

    #[test]
    fn test_accepts_12_digit_inn() {
        let inn = Inn::new("123456789012").unwrap();
        assert_eq!(inn.as_str(), "123456789012");
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        let inn = Inn::new("  1234567890 ").unwrap();
        assert_eq!(inn.as_str(), "1234567890");
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert!(matches!(
            Inn::new("12345"),
            Err(ValidationError::InvalidLength { actual: 5, .. })
        ));
        assert!(Inn::new("").is_err());
        assert!(Inn::new("12345678901").is_err(), "11 digits is not a legal INN length");
    }

    #[test]
    fn test_rejects_non_digits() {
        assert!(matches!(
            Inn::new("12345678AB"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(Inn::new("12345678-0").is_err());
    }
}
