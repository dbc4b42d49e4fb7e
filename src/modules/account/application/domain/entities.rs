use std::fmt;
use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use uuid::Uuid;

use super::errors::AccountError;

static HANDLE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@[A-Za-z0-9_]{2,30}$").expect("handle pattern compiles"));

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+[1-9][0-9]{7,14}$").expect("phone pattern compiles"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: Uuid,
    pub handle: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// `None` while the account is active.
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Account {
    pub fn is_active(&self) -> bool {
        self.deleted_at.is_none()
    }
}

/// ========================= Handle =========================
///
/// A display name of the form `@` followed by 2 to 30 ASCII letters,
/// digits or underscores. Surrounding whitespace is stripped before the
/// pattern is checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Handle(String);

impl Handle {
    pub fn parse(raw: &str) -> Result<Self, AccountError> {
        let handle = raw.trim();

        if !HANDLE_PATTERN.is_match(handle) {
            return Err(AccountError::InvalidHandle);
        }

        Ok(Self(handle.to_string()))
    }

    /// Wraps a value produced by a handle generator whose alphabet and length
    /// already satisfy the pattern.
    pub(crate) fn from_generated(handle: String) -> Self {
        debug_assert!(HANDLE_PATTERN.is_match(&handle), "bad generated handle {handle}");
        Self(handle)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// ========================= Phone =========================
///
/// E.164-like number: `+`, a non-zero leading digit, 8 to 15 digits in total.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    pub fn parse(raw: &str) -> Result<Self, AccountError> {
        let phone = raw.trim();

        if !PHONE_PATTERN.is_match(phone) {
            return Err(AccountError::InvalidPhone);
        }

        Ok(Self(phone.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_accepts_pattern_conformant_values() {
        let longest = format!("@{}", "a".repeat(30));
        for raw in ["@ab", "@int_nick_2", "@ABC_123", longest.as_str()] {
            assert!(Handle::parse(raw).is_ok(), "expected {raw:?} to be valid");
        }
    }

    #[test]
    fn test_handle_trims_surrounding_whitespace() {
        let handle = Handle::parse("  @nick_1 \n").unwrap();
        assert_eq!(handle.as_str(), "@nick_1");
    }

    #[test]
    fn test_handle_rejects_malformed_values() {
        let too_long = format!("@{}", "a".repeat(31));
        for raw in ["@", "@a", "", "nick", "@ni ck", "@nick!", "@nĩck", too_long.as_str()] {
            assert!(
                matches!(Handle::parse(raw), Err(AccountError::InvalidHandle)),
                "expected {raw:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_phone_accepts_e164_numbers() {
        for raw in ["+15550000001", "+12345678", "+123456789012345"] {
            assert!(Phone::parse(raw).is_ok(), "expected {raw:?} to be valid");
        }
    }

    #[test]
    fn test_phone_trims_surrounding_whitespace() {
        let phone = Phone::parse(" +15551234567 ").unwrap();
        assert_eq!(phone.as_str(), "+15551234567");
    }

    #[test]
    fn test_phone_rejects_malformed_values() {
        for raw in ["123", "", "+0123", "+0123456789", "+1234567", "+1234567890123456", "15551234567", "+1555 123 4567"] {
            assert!(
                matches!(Phone::parse(raw), Err(AccountError::InvalidPhone)),
                "expected {raw:?} to be rejected"
            );
        }
    }
}
