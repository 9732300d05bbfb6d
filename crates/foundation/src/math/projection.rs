use super::Vec3;

/// Calibration shift applied to feed latitudes before projection (degrees).
pub const LATITUDE_OFFSET: f64 = 0.1;
/// Calibration shift applied to feed longitudes before projection (degrees).
///
/// The feed's prime meridian is rotated 90 degrees east of the render
/// convention's, so the marker frame is corrected westwards.
pub const LONGITUDE_OFFSET: f64 = -90.0;

/// Fixed coordinate-frame corrections between the position feed and the
/// render convention. Set once at build time, never mutated at runtime.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ProjectionOffsets {
    pub latitude: f64,
    pub longitude: f64,
}

impl ProjectionOffsets {
    pub const NONE: ProjectionOffsets = ProjectionOffsets {
        latitude: 0.0,
        longitude: 0.0,
    };

    /// The process-wide calibration constants for the live feed.
    pub const CALIBRATED: ProjectionOffsets = ProjectionOffsets {
        latitude: LATITUDE_OFFSET,
        longitude: LONGITUDE_OFFSET,
    };

    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Projects a geographic coordinate onto a sphere of the given radius.
///
/// Spherical-to-Cartesian with the render engine's conventions: `y` is the
/// polar axis and `x` carries a horizontal mirror (`-sin(phi)`) to match its
/// handedness. Offsets are applied additively before conversion.
///
/// Longitude is not normalized here; callers feeding values outside
/// [-180, 180] get the mathematically continued point.
pub fn project(lat_deg: f64, lon_deg: f64, radius: f64, offsets: ProjectionOffsets) -> Vec3 {
    let adj_lat = lat_deg + offsets.latitude;
    let adj_lon = lon_deg + offsets.longitude;

    let phi = (90.0 - adj_lat).to_radians();
    let theta = (adj_lon + 180.0).to_radians();

    Vec3::new(
        -radius * phi.sin() * theta.cos(),
        radius * phi.cos(),
        radius * phi.sin() * theta.sin(),
    )
}
