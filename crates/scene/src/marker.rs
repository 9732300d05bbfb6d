use foundation::geo::GeoPosition;
use foundation::math::{ProjectionOffsets, project};

use crate::World;
use crate::components::{Drawable3D, Material, Transform};
use crate::entity::EntityId;
use crate::globe::GlobeHandle;

/// Render-space radius of the marker sphere.
pub const MARKER_RADIUS: f64 = 2.0;
/// Marker highlight color.
pub const MARKER_COLOR: &str = "#ff0000";

/// Owns the one persistent marker object.
///
/// The marker is created lazily on the first position applied after the globe
/// exists, and from then on every accepted update only rewrites its
/// transform. Updates arriving before the globe is built are retained in a
/// one-slot buffer (latest wins) and applied when the globe becomes ready,
/// so early feed data is deferred rather than lost.
#[derive(Debug)]
pub struct MarkerController {
    offsets: ProjectionOffsets,
    entity: Option<EntityId>,
    pending: Option<GeoPosition>,
}

impl MarkerController {
    pub fn new(offsets: ProjectionOffsets) -> Self {
        Self {
            offsets,
            entity: None,
            pending: None,
        }
    }

    pub fn entity(&self) -> Option<EntityId> {
        self.entity
    }

    /// Handles one accepted stream position.
    ///
    /// Malformed input is filtered upstream by the consumer; this never
    /// fails. Without a globe the position is buffered and no marker exists.
    pub fn on_position(&mut self, world: &mut World, globe: Option<GlobeHandle>, pos: GeoPosition) {
        match globe {
            Some(globe) => self.place(world, globe, &pos),
            None => self.pending = Some(pos),
        }
    }

    /// Applies the buffered position, if any, once the globe is built.
    pub fn flush_pending(&mut self, world: &mut World, globe: GlobeHandle) {
        if let Some(pos) = self.pending.take() {
            self.place(world, globe, &pos);
        }
    }

    fn place(&mut self, world: &mut World, globe: GlobeHandle, pos: &GeoPosition) {
        let entity = match self.entity {
            Some(entity) => entity,
            None => {
                let entity = world.spawn();
                world.set_drawable_3d(entity, Drawable3D::sphere(MARKER_RADIUS));
                world.set_material(entity, Material::basic(MARKER_COLOR));
                self.entity = Some(entity);
                entity
            }
        };

        let point = project(pos.latitude, pos.longitude, globe.radius, self.offsets);
        world.set_transform(entity, Transform::translate(point));
    }

    /// Releases the marker on scene unmount.
    pub fn release(&mut self, world: &mut World) {
        if let Some(entity) = self.entity.take() {
            world.despawn(entity);
        }
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::{MARKER_RADIUS, MarkerController};
    use crate::World;
    use crate::components::GlobeStyle;
    use crate::globe::GlobeBuilder;
    use foundation::geo::GeoPosition;
    use foundation::math::{ProjectionOffsets, project};

    fn built_scene() -> (World, GlobeBuilder) {
        let mut world = World::new();
        let mut builder = GlobeBuilder::new();
        builder.build_once(&mut world, Vec::new(), &GlobeStyle::default());
        (world, builder)
    }

    #[test]
    fn repeated_updates_keep_exactly_one_marker() {
        let (mut world, builder) = built_scene();
        let mut marker = MarkerController::new(ProjectionOffsets::NONE);

        for lon in 0..5 {
            marker.on_position(
                &mut world,
                builder.handle(),
                GeoPosition::new(10.0, lon as f64, None),
            );
        }

        // Globe + one marker, never more.
        assert_eq!(world.drawables_3d().len(), 2);
        let entity = marker.entity().expect("marker entity");
        assert_eq!(world.drawable_3d(entity).unwrap().radius(), MARKER_RADIUS);
    }

    #[test]
    fn repositioning_mutates_in_place() {
        let (mut world, builder) = built_scene();
        let mut marker = MarkerController::new(ProjectionOffsets::NONE);
        let globe = builder.handle().unwrap();

        marker.on_position(&mut world, Some(globe), GeoPosition::new(51.5, 0.0, None));
        let first_entity = marker.entity().unwrap();

        marker.on_position(&mut world, Some(globe), GeoPosition::new(-33.9, 151.2, None));
        assert_eq!(marker.entity().unwrap(), first_entity);

        let expected = project(-33.9, 151.2, globe.radius, ProjectionOffsets::NONE);
        assert_eq!(world.transform(first_entity).unwrap().position, expected);
    }

    #[test]
    fn no_globe_means_no_marker() {
        let mut world = World::new();
        let mut marker = MarkerController::new(ProjectionOffsets::NONE);

        marker.on_position(&mut world, None, GeoPosition::new(0.0, 0.0, None));

        assert!(marker.entity().is_none());
        assert!(world.drawables_3d().is_empty());
    }

    #[test]
    fn buffered_position_applies_when_globe_is_ready() {
        let mut world = World::new();
        let mut marker = MarkerController::new(ProjectionOffsets::NONE);

        // Two updates before the globe exists: only the latest survives.
        marker.on_position(&mut world, None, GeoPosition::new(1.0, 1.0, None));
        marker.on_position(&mut world, None, GeoPosition::new(2.0, 2.0, None));

        let mut builder = GlobeBuilder::new();
        let globe = builder.build_once(&mut world, Vec::new(), &GlobeStyle::default());
        marker.flush_pending(&mut world, globe);

        let entity = marker.entity().expect("marker after flush");
        let expected = project(2.0, 2.0, globe.radius, ProjectionOffsets::NONE);
        assert_eq!(world.transform(entity).unwrap().position, expected);

        // Nothing left to flush.
        marker.flush_pending(&mut world, globe);
        assert_eq!(world.drawables_3d().len(), 2);
    }

    #[test]
    fn release_removes_marker_and_pending() {
        let (mut world, builder) = built_scene();
        let mut marker = MarkerController::new(ProjectionOffsets::NONE);
        let globe = builder.handle().unwrap();

        marker.on_position(&mut world, Some(globe), GeoPosition::new(0.0, 0.0, None));
        marker.release(&mut world);

        assert!(marker.entity().is_none());
        assert_eq!(world.drawables_3d().len(), 1); // globe only
    }
}
