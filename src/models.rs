use serde::{Deserialize, Serialize};

// ============ Lookup Models ============

/// A resolved lookup result.
///
/// Records are never mutated once built; the tracker replaces them wholesale.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationRecord {
    /// Phone number the record belongs to.
    pub phone: String,
    /// Country name.
    pub country: String,
    /// Region or state.
    pub region: String,
    /// City name.
    pub city: String,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Mobile carrier name.
    pub carrier: String,
    /// Timezone label (e.g., "PST (UTC-8)").
    pub timezone: String,
    /// Human-readable relative time of the last sighting.
    pub last_seen: String,
}

impl LocationRecord {
    /// Whether the coordinates fall inside the valid latitude/longitude ranges.
    pub fn has_valid_coordinates(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Last four characters of the phone field, used for loose matching.
    ///
    /// Shorter phone fields return the whole string.
    pub fn phone_suffix(&self) -> &str {
        let start = self
            .phone
            .char_indices()
            .rev()
            .nth(3)
            .map(|(idx, _)| idx)
            .unwrap_or(0);
        &self.phone[start..]
    }
}

#[allow(clippy::too_many_arguments)]
fn sample(
    phone: &str,
    country: &str,
    region: &str,
    city: &str,
    latitude: f64,
    longitude: f64,
    carrier: &str,
    timezone: &str,
    last_seen: &str,
) -> LocationRecord {
    LocationRecord {
        phone: phone.to_string(),
        country: country.to_string(),
        region: region.to_string(),
        city: city.to_string(),
        latitude,
        longitude,
        carrier: carrier.to_string(),
        timezone: timezone.to_string(),
        last_seen: last_seen.to_string(),
    }
}

/// Builds the built-in sample records, in lookup order.
///
/// The same list drives both matching and the quick-fill samples on the page.
pub fn reference_set() -> Vec<LocationRecord> {
    vec![
        sample(
            "+1234567890",
            "United States",
            "California",
            "San Francisco",
            37.7749,
            -122.4194,
            "Verizon",
            "PST (UTC-8)",
            "2 minutes ago",
        ),
        sample(
            "+447911123456",
            "United Kingdom",
            "England",
            "London",
            51.5074,
            -0.1278,
            "EE",
            "GMT (UTC+0)",
            "5 minutes ago",
        ),
        sample(
            "+33123456789",
            "France",
            "Île-de-France",
            "Paris",
            48.8566,
            2.3522,
            "Orange",
            "CET (UTC+1)",
            "1 minute ago",
        ),
    ]
}

/// Body of a track request.
#[derive(Debug, Clone, Deserialize)]
pub struct TrackRequest {
    /// Free-text phone number as typed by the user.
    #[serde(default)]
    pub phone: String,
}
