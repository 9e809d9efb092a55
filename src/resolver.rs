//! Lookup resolution against the built-in reference set
//!
//! Matching is deliberately loose: a sample matches when its phone equals
//! the input, or when the sample's last four characters appear anywhere in
//! the input. Anything else gets a synthesized record near New York with
//! jittered coordinates.

use crate::models::LocationRecord;
use rand::Rng;

/// Base latitude for synthesized records.
pub const FALLBACK_LATITUDE: f64 = 40.7128;
/// Base longitude for synthesized records.
pub const FALLBACK_LONGITUDE: f64 = -74.0060;
/// Half-width of the jitter window, in degrees.
pub const JITTER_DEGREES: f64 = 5.0;

pub const FALLBACK_COUNTRY: &str = "Demo Country";
pub const FALLBACK_REGION: &str = "Demo Region";
pub const FALLBACK_CITY: &str = "Demo City";
pub const FALLBACK_CARRIER: &str = "Demo Carrier";
pub const FALLBACK_TIMEZONE: &str = "UTC+0";
pub const FALLBACK_LAST_SEEN: &str = "Just now";

/// Finds the first reference record matching the input, if any.
pub fn find_match<'a>(phone: &str, reference_set: &'a [LocationRecord]) -> Option<&'a LocationRecord> {
    reference_set
        .iter()
        .find(|record| record.phone == phone || phone.contains(record.phone_suffix()))
}

/// Resolves a phone number to a location record.
///
/// Never fails: unmatched numbers get a synthesized record.
pub fn resolve(phone: &str, reference_set: &[LocationRecord]) -> LocationRecord {
    resolve_with_rng(phone, reference_set, &mut rand::thread_rng())
}

/// Same as [`resolve`], drawing jitter from the given generator.
pub fn resolve_with_rng<R: Rng + ?Sized>(
    phone: &str,
    reference_set: &[LocationRecord],
    rng: &mut R,
) -> LocationRecord {
    match find_match(phone, reference_set) {
        Some(record) => {
            tracing::debug!("Matched reference record for {}: {}", phone, record.city);
            record.clone()
        }
        None => {
            tracing::debug!("No reference match for {}, synthesizing record", phone);
            synthesize(phone, rng)
        }
    }
}

/// Builds a placeholder record with coordinates jittered in `[-5, 5)` degrees.
pub fn synthesize<R: Rng + ?Sized>(phone: &str, rng: &mut R) -> LocationRecord {
    let lat_offset = rng.gen_range(-JITTER_DEGREES..JITTER_DEGREES);
    let lng_offset = rng.gen_range(-JITTER_DEGREES..JITTER_DEGREES);

    LocationRecord {
        phone: phone.to_string(),
        country: FALLBACK_COUNTRY.to_string(),
        region: FALLBACK_REGION.to_string(),
        city: FALLBACK_CITY.to_string(),
        latitude: FALLBACK_LATITUDE + lat_offset,
        longitude: FALLBACK_LONGITUDE + lng_offset,
        carrier: FALLBACK_CARRIER.to_string(),
        timezone: FALLBACK_TIMEZONE.to_string(),
        last_seen: FALLBACK_LAST_SEEN.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::reference_set;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_exact_match() {
        let record = resolve("+1234567890", &reference_set());
        assert_eq!(record.country, "United States");
        assert_eq!(record.city, "San Francisco");
    }

    #[test]
    fn test_suffix_contained_anywhere() {
        let record = resolve("my number ends in 3456", &reference_set());
        assert_eq!(record.city, "London");

        let record = resolve("67891111", &reference_set());
        assert_eq!(record.city, "Paris");
    }

    #[test]
    fn test_first_match_wins() {
        // Contains both "7890" (San Francisco) and "3456" (London).
        let record = resolve("+4434567890", &reference_set());
        assert_eq!(record.city, "San Francisco");
    }

    #[test]
    fn test_matched_record_keeps_reference_phone() {
        let record = resolve("+44 7911 123456", &reference_set());
        assert_eq!(record.phone, "+447911123456");
    }

    #[test]
    fn test_fallback_record() {
        let mut rng = StdRng::seed_from_u64(7);
        let record = resolve_with_rng("+19999999999", &reference_set(), &mut rng);

        assert_eq!(record.phone, "+19999999999");
        assert_eq!(record.country, FALLBACK_COUNTRY);
        assert_eq!(record.city, FALLBACK_CITY);
        assert_eq!(record.last_seen, FALLBACK_LAST_SEEN);
        assert!((35.7128..=45.7128).contains(&record.latitude));
        assert!((-79.0060..=-69.0060).contains(&record.longitude));
    }

    #[test]
    fn test_fallback_keeps_input_as_given() {
        let record = resolve("+1 999 999 9999", &reference_set());
        assert_eq!(record.phone, "+1 999 999 9999");
    }

    #[test]
    fn test_empty_reference_set_always_synthesizes() {
        let record = resolve("+1234567890", &[]);
        assert_eq!(record.country, FALLBACK_COUNTRY);
    }
}
