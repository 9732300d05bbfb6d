use foundation::math::Vec3;

use crate::World;
use crate::components::{ComponentOverlay, Drawable3D, GlobeStyle, Material, SurfaceOverlay, Transform};
use crate::entity::EntityId;

/// Render-space radius of the globe sphere.
pub const GLOBE_RADIUS: f64 = 100.0;

/// The built globe object. At most one exists per mounted scene.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GlobeHandle {
    pub entity: EntityId,
    /// Sphere radius read back from the drawable; every projection uses it.
    pub radius: f64,
}

/// Scene initializer for the globe.
///
/// Construction is guarded by an existence check so that re-invocations
/// (from unrelated re-renders, or a second dataset notification) are no-ops
/// and can never leave two globes in the render group.
#[derive(Debug, Default)]
pub struct GlobeBuilder {
    built: Option<GlobeHandle>,
}

impl GlobeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&self) -> Option<GlobeHandle> {
        self.built
    }

    pub fn is_built(&self) -> bool {
        self.built.is_some()
    }

    /// Builds the globe sphere with its polygon overlay and material, once.
    ///
    /// Style is read here and only here; a second call returns the existing
    /// handle untouched.
    pub fn build_once(
        &mut self,
        world: &mut World,
        rings: Vec<Vec<Vec3>>,
        style: &GlobeStyle,
    ) -> GlobeHandle {
        if let Some(handle) = self.built {
            return handle;
        }

        let entity = world.spawn();
        let drawable = Drawable3D::sphere(GLOBE_RADIUS);
        world.set_transform(entity, Transform::identity());
        world.set_drawable_3d(entity, drawable);
        world.set_material(entity, Material::from_style(style));
        let overlay_id = world.add_overlay(SurfaceOverlay { rings });
        world.set_overlay(entity, ComponentOverlay::new(overlay_id));

        let handle = GlobeHandle {
            entity,
            radius: drawable.radius(),
        };
        self.built = Some(handle);
        handle
    }

    /// Releases the globe on scene unmount.
    pub fn release(&mut self, world: &mut World) {
        if let Some(handle) = self.built.take() {
            world.despawn(handle.entity);
        }
    }
}
