//! Phone number format validation
//!
//! Accepts numbers shaped like the ITU E.164 numbering plan: an optional
//! leading `+`, a first digit 1-9, and 2 to 15 significant digits in total.
//! Whitespace anywhere in the input is ignored.

use crate::errors::LookupError;
use regex::Regex;
use std::sync::OnceLock;

fn phone_regex() -> &'static Regex {
    static PHONE_REGEX: OnceLock<Regex> = OnceLock::new();
    // `\d` is Unicode-aware in the regex crate; only ASCII digits count here.
    PHONE_REGEX.get_or_init(|| {
        Regex::new(r"^\+?[1-9][0-9]{1,14}$").expect("phone pattern is a valid regex")
    })
}

fn whitespace_regex() -> &'static Regex {
    static WHITESPACE_REGEX: OnceLock<Regex> = OnceLock::new();
    // Browser `\s`: includes U+FEFF, excludes U+0085 (unlike Unicode White_Space).
    WHITESPACE_REGEX.get_or_init(|| {
        Regex::new(
            r"[\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]+",
        )
        .expect("whitespace pattern is a valid regex")
    })
}

/// Removes every whitespace run from the input.
pub fn strip_whitespace(input: &str) -> String {
    whitespace_regex().replace_all(input, "").into_owned()
}

/// Returns true when the input is an E.164-like phone number.
///
/// # Examples
///
/// ```rust
/// use phone_locator::validator::validate;
///
/// assert!(validate("+1234567890"));
/// assert!(validate("+44 7911 123456"));
/// assert!(!validate("0123456789"));
/// assert!(!validate(""));
/// ```
pub fn validate(input: &str) -> bool {
    phone_regex().is_match(&strip_whitespace(input))
}

/// Validates the input and tells empty input apart from malformed input.
///
/// Empty means nothing but whitespace; the caller picks the message to show
/// from the returned error.
pub fn check(input: &str) -> Result<(), LookupError> {
    if strip_whitespace(input).is_empty() {
        return Err(LookupError::EmptyInput);
    }
    if !validate(input) {
        return Err(LookupError::InvalidPhoneFormat);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_e164_shapes() {
        assert!(validate("+1234567890"));
        assert!(validate("1234567890"));
        assert!(validate("12"));
        assert!(validate("+123456789012345"));
        assert!(validate("+33 1 23 45 67 89"));
        assert!(validate("  +447911123456\t"));
    }

    #[test]
    fn test_rejects_bad_shapes() {
        assert!(!validate(""));
        assert!(!validate("+"));
        assert!(!validate("   "));
        assert!(!validate("0123456789"));
        assert!(!validate("+0123456789"));
        assert!(!validate("1"));
        assert!(!validate("+1234567890123456"));
        assert!(!validate("++1234567890"));
        assert!(!validate("123-456-7890"));
        assert!(!validate("(123) 4567890"));
        assert!(!validate("x1234567890"));
        assert!(!validate("1234567890#"));
    }

    #[test]
    fn test_rejects_non_ascii_digits() {
        // Arabic-Indic digits are `\d` in Unicode mode but not phone digits.
        assert!(!validate("+١٢٣٤٥٦٧"));
    }

    #[test]
    fn test_check_distinguishes_empty_from_malformed() {
        assert_eq!(check(""), Err(LookupError::EmptyInput));
        assert_eq!(check("  \t "), Err(LookupError::EmptyInput));
        assert_eq!(check("+"), Err(LookupError::InvalidPhoneFormat));
        assert_eq!(check("my number ends in 3456"), Err(LookupError::InvalidPhoneFormat));
        assert_eq!(check("+1 234 567 890"), Ok(()));
    }

    #[test]
    fn test_strip_whitespace() {
        assert_eq!(strip_whitespace(" +1 23\t4\n"), "+1234");
        assert_eq!(strip_whitespace("+1\u{A0}2\u{3000}3\u{FEFF}4"), "+1234");
        assert_eq!(strip_whitespace("+12\u{85}34"), "+12\u{85}34");
    }

    #[test]
    fn test_whitespace_set_matches_browser_regex() {
        // Byte order mark and no-break space are skipped like ordinary spaces.
        assert!(validate("+1234567890\u{FEFF}"));
        assert!(validate("\u{A0}+1234567890"));
        // NEL is not whitespace for the page's input pattern.
        assert!(!validate("+1234567890\u{85}"));
        assert_eq!(check("\u{85}"), Err(LookupError::InvalidPhoneFormat));
        assert_eq!(check("\u{FEFF}\u{A0}"), Err(LookupError::EmptyInput));
    }
}
