use foundation::math::{ProjectionOffsets, Vec3, project};
use scene::World;
use scene::components::GlobeStyle;
use scene::globe::{GLOBE_RADIUS, GlobeBuilder, GlobeHandle};

use crate::boundary::BoundaryDataset;

/// Projects every dataset ring onto the sphere surface.
///
/// The overlay uses no calibration offsets; those correct the live feed's
/// coordinate frame only.
pub fn overlay_rings(dataset: &BoundaryDataset, radius: f64) -> Vec<Vec<Vec3>> {
    let mut rings = Vec::new();
    for feature in &dataset.features {
        for polygon in &feature.polygons {
            for ring in polygon {
                if ring.len() < 3 {
                    continue;
                }
                rings.push(
                    ring.iter()
                        .map(|p| project(p.lat_deg, p.lon_deg, radius, ProjectionOffsets::NONE))
                        .collect(),
                );
            }
        }
    }
    rings
}

/// Builds the globe from a loaded dataset. Idempotence comes from the
/// builder's existence guard, so this is safe to call on every dataset
/// notification.
pub fn build_globe_from_dataset(
    builder: &mut GlobeBuilder,
    world: &mut World,
    dataset: &BoundaryDataset,
    style: &GlobeStyle,
) -> GlobeHandle {
    let rings = overlay_rings(dataset, GLOBE_RADIUS);
    builder.build_once(world, rings, style)
}
