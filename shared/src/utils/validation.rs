//! Credential validation rules

use once_cell::sync::Lazy;
use regex::Regex;

// Login ids: 4-20 characters, letters, digits, and underscore only
static USER_ID_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_]{4,20}$").unwrap());

/// Minimum password length
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Maximum password length (bcrypt truncates input beyond 72 bytes)
pub const PASSWORD_MAX_LENGTH: usize = 72;

/// Check if a login id is well-formed
pub fn is_valid_user_id(user_id: &str) -> bool {
    USER_ID_REGEX.is_match(user_id)
}

/// Check if a password satisfies the length policy
pub fn is_valid_password(password: &str) -> bool {
    let len = password.len();
    len >= PASSWORD_MIN_LENGTH && len <= PASSWORD_MAX_LENGTH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_user_id() {
        assert!(is_valid_user_id("alice"));
        assert!(is_valid_user_id("bob_2024"));
        assert!(is_valid_user_id("A1b2"));
        assert!(!is_valid_user_id("abc")); // Too short
        assert!(!is_valid_user_id("a".repeat(21).as_str())); // Too long
        assert!(!is_valid_user_id("has space"));
        assert!(!is_valid_user_id("has-dash"));
        assert!(!is_valid_user_id(""));
    }

    #[test]
    fn test_is_valid_password() {
        assert!(is_valid_password("12345678"));
        assert!(is_valid_password(&"x".repeat(72)));
        assert!(!is_valid_password("1234567")); // Too short
        assert!(!is_valid_password(&"x".repeat(73))); // Beyond bcrypt input limit
    }
}
