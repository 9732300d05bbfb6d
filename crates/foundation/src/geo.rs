/// Sentinel for positions whose region attribute is absent from the feed.
pub const UNKNOWN_REGION: &str = "unknown";

/// A geographic position accepted from the feed, in degrees.
///
/// Immutable value semantics: each update replaces the previous position
/// wholesale, there is no partial mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoPosition {
    pub latitude: f64,
    pub longitude: f64,
    /// Auxiliary region attribute (a country code in the live feed).
    pub region: String,
}

impl GeoPosition {
    pub fn new(latitude: f64, longitude: f64, region: Option<String>) -> Self {
        Self {
            latitude,
            longitude,
            region: region.unwrap_or_else(|| UNKNOWN_REGION.to_string()),
        }
    }
}
