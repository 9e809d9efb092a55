/// Property-based tests using proptest
/// Tests invariants of phone validation and lookup resolution for all inputs
use proptest::prelude::*;
use phone_locator::models::reference_set;
use phone_locator::resolver::{resolve, FALLBACK_COUNTRY};
use phone_locator::validator::{check, validate};

// Property: Validation should never panic
proptest! {
    #[test]
    fn validation_never_panics(input in "\\PC*") {
        let _ = validate(&input);
        let _ = check(&input);
    }

    #[test]
    fn e164_shapes_accepted(
        plus in proptest::bool::ANY,
        first in 1u8..=9u8,
        rest in "[0-9]{1,14}"
    ) {
        let phone = format!("{}{}{}", if plus { "+" } else { "" }, first, rest);
        prop_assert!(validate(&phone), "E.164 shape should be valid: {}", phone);
    }

    #[test]
    fn internal_whitespace_ignored(
        first in 1u8..=9u8,
        rest in "[0-9]{1,14}",
        split in 0usize..14
    ) {
        let digits = format!("{}{}", first, rest);
        let at = split.min(digits.len());
        let spaced = format!("+{} {}", &digits[..at], &digits[at..]);
        prop_assert!(validate(&spaced), "Spaced number should be valid: {}", spaced);
    }
}

// Property: Rejection rules
proptest! {
    #[test]
    fn leading_zero_rejected(rest in "[0-9]{1,14}", plus in proptest::bool::ANY) {
        let phone = format!("{}0{}", if plus { "+" } else { "" }, rest);
        prop_assert!(!validate(&phone), "Leading zero should be invalid: {}", phone);
    }

    #[test]
    fn letters_rejected(
        prefix in "[1-9][0-9]{0,6}",
        letter in "[a-zA-Z]",
        suffix in "[0-9]{0,6}"
    ) {
        let phone = format!("{}{}{}", prefix, letter, suffix);
        prop_assert!(!validate(&phone), "Number with a letter should be invalid: {}", phone);
    }

    #[test]
    fn too_long_rejected(first in 1u8..=9u8, rest in "[0-9]{15,30}") {
        let phone = format!("+{}{}", first, rest);
        prop_assert!(!validate(&phone), "More than 15 digits should be invalid: {}", phone);
    }

    #[test]
    fn single_digit_rejected(digit in 0u8..=9u8) {
        prop_assert!(!validate(&digit.to_string()));
        let plus_digit = format!("+{}", digit);
        prop_assert!(!validate(&plus_digit));
    }
}

// Property: Resolution always yields a record, fallback stays within jitter bounds
proptest! {
    #[test]
    fn resolve_never_panics(input in "\\PC*") {
        let _ = resolve(&input, &reference_set());
    }

    #[test]
    fn fallback_within_jitter_bounds(digits in "[1-9]{2,15}") {
        let samples = reference_set();
        prop_assume!(samples
            .iter()
            .all(|s| s.phone != digits && !digits.contains(s.phone_suffix())));

        let record = resolve(&digits, &samples);
        prop_assert_eq!(record.country.as_str(), FALLBACK_COUNTRY);
        prop_assert_eq!(record.phone.as_str(), digits.as_str());
        prop_assert!((35.7128..=45.7128).contains(&record.latitude));
        prop_assert!((-79.0060..=-69.0060).contains(&record.longitude));
    }

    #[test]
    fn sample_suffix_anywhere_matches(
        prefix in "[a-z ]{0,10}",
        suffix in "[a-z ]{0,10}",
        index in 0usize..3
    ) {
        let samples = reference_set();
        let sample = &samples[index];
        let input = format!("{}{}{}", prefix, sample.phone_suffix(), suffix);

        let record = resolve(&input, &samples);
        prop_assert_eq!(record.city.as_str(), sample.city.as_str());
    }
}
