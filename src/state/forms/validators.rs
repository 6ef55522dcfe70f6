//! Field validators
//!
//! | field   | rule                                   |
//! |---------|----------------------------------------|
//! | name    | `^[A-Za-z]{3,}$`                       |
//! | email   | `^[^\s@]+@[^\s@]+\.[^\s@]+$`           |
//! | phone   | `^\([0-9]{3}\) [0-9]{3}-[0-9]{4}$`     |
//! | message | non-empty after trimming               |

use regex::Regex;
use std::sync::LazyLock;

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{3,}$").expect("name pattern compiles"));

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

// `\d` is Unicode-aware in the regex crate, the mask only accepts ASCII digits.
static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\([0-9]{3}\) [0-9]{3}-[0-9]{4}$").expect("phone pattern compiles")
});

/// Three or more ASCII letters, nothing else
pub fn validate_name(value: &str) -> bool {
    NAME_PATTERN.is_match(value)
}

/// Minimal structural check: something, `@`, something, `.`, something
pub fn validate_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Exactly the canonical mask `(DDD) DDD-DDDD`
pub fn validate_phone(value: &str) -> bool {
    PHONE_PATTERN.is_match(value)
}

pub fn validate_message(value: &str) -> bool {
    !value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    mod name {
        use super::*;

        #[test]
        fn accepts_three_or_more_letters() {
            assert!(validate_name("Ann"));
            assert!(validate_name("Bartholomew"));
            assert!(validate_name("xYz"));
        }

        #[test]
        fn rejects_short_names() {
            assert!(!validate_name("Jo"));
            assert!(!validate_name(""));
        }

        #[test]
        fn rejects_digits_spaces_and_punctuation() {
            assert!(!validate_name("A1"));
            assert!(!validate_name("Ann1"));
            assert!(!validate_name("Mary Ann"));
            assert!(!validate_name("O'Neil"));
            assert!(!validate_name("Jean-Luc"));
        }

        #[test]
        fn rejects_non_ascii_letters() {
            assert!(!validate_name("Zoë"));
        }
    }

    mod email {
        use super::*;

        #[test]
        fn accepts_simple_address() {
            assert!(validate_email("a@b.com"));
            assert!(validate_email("first.last@sub.example.org"));
        }

        #[test]
        fn requires_a_dot_after_the_at() {
            assert!(!validate_email("a@b"));
        }

        #[test]
        fn rejects_double_at() {
            assert!(!validate_email("a@@b.com"));
        }

        #[test]
        fn rejects_whitespace() {
            assert!(!validate_email("a b@c.com"));
            assert!(!validate_email("a@b .com"));
        }
    }

    mod phone {
        use super::*;

        #[test]
        fn accepts_canonical_mask() {
            assert!(validate_phone("(555) 123-4567"));
        }

        #[test]
        fn rejects_partial_or_raw_digits() {
            assert!(!validate_phone("(555) 123-456"));
            assert!(!validate_phone("5551234567"));
            assert!(!validate_phone("(555)123-4567"));
        }

        #[test]
        fn rejects_non_ascii_digits() {
            assert!(!validate_phone("(٥٥٥) 123-4567"));
        }
    }

    mod message {
        use super::*;

        #[test]
        fn whitespace_only_is_empty() {
            assert!(!validate_message("   \n\t"));
        }

        #[test]
        fn any_visible_text_is_enough() {
            assert!(validate_message(" hi "));
        }
    }
}
