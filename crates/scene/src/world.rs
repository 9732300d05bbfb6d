use crate::components::{ComponentOverlay, Drawable3D, Material, OverlayId, SurfaceOverlay, Transform};
use crate::entity::EntityId;
use foundation::handles::Handle;

/// The render group: every scene object for the globe visualization lives
/// here, outside any reactive state, and is mutated in place by its owning
/// controller.
///
/// Single-writer discipline: the globe slot is written only by the scene
/// initializer and the marker slot only by the marker controller, so no
/// locking is needed.
#[derive(Debug, Default)]
pub struct World {
    next_index: u32,
    transforms: Vec<Option<Transform>>,
    drawables_3d: Vec<Option<Drawable3D>>,
    materials: Vec<Option<Material>>,
    overlay_refs: Vec<Option<ComponentOverlay>>,
    overlays: Vec<SurfaceOverlay>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self) -> EntityId {
        let id = EntityId(Handle::new(self.next_index, 0));
        self.next_index += 1;
        self.ensure_capacity(id.index() as usize);
        id
    }

    /// Releases an entity's render objects. The slot is not reused.
    pub fn despawn(&mut self, entity: EntityId) {
        let idx = entity.index() as usize;
        if idx < self.transforms.len() {
            self.transforms[idx] = None;
            self.drawables_3d[idx] = None;
            self.materials[idx] = None;
            self.overlay_refs[idx] = None;
        }
    }

    pub fn set_transform(&mut self, entity: EntityId, transform: Transform) {
        self.ensure_capacity(entity.index() as usize);
        self.transforms[entity.index() as usize] = Some(transform);
    }

    pub fn transform(&self, entity: EntityId) -> Option<Transform> {
        self.transforms.get(entity.index() as usize).and_then(|t| *t)
    }

    pub fn set_drawable_3d(&mut self, entity: EntityId, drawable: Drawable3D) {
        self.ensure_capacity(entity.index() as usize);
        self.drawables_3d[entity.index() as usize] = Some(drawable);
    }

    pub fn drawable_3d(&self, entity: EntityId) -> Option<Drawable3D> {
        self.drawables_3d
            .get(entity.index() as usize)
            .and_then(|d| *d)
    }

    pub fn set_material(&mut self, entity: EntityId, material: Material) {
        self.ensure_capacity(entity.index() as usize);
        self.materials[entity.index() as usize] = Some(material);
    }

    pub fn material(&self, entity: EntityId) -> Option<&Material> {
        self.materials
            .get(entity.index() as usize)
            .and_then(|m| m.as_ref())
    }

    pub fn add_overlay(&mut self, overlay: SurfaceOverlay) -> OverlayId {
        let id = OverlayId(self.overlays.len() as u32);
        self.overlays.push(overlay);
        id
    }

    pub fn set_overlay(&mut self, entity: EntityId, component: ComponentOverlay) {
        self.ensure_capacity(entity.index() as usize);
        self.overlay_refs[entity.index() as usize] = Some(component);
    }

    pub fn overlay(&self, id: OverlayId) -> Option<&SurfaceOverlay> {
        self.overlays.get(id.0 as usize)
    }

    pub fn overlay_of(&self, entity: EntityId) -> Option<&SurfaceOverlay> {
        self.overlay_refs
            .get(entity.index() as usize)
            .and_then(|c| *c)
            .and_then(|c| self.overlay(c.id))
    }

    /// All live drawables with their transforms, in spawn order.
    pub fn drawables_3d(&self) -> Vec<(EntityId, Transform, Drawable3D)> {
        let mut out = Vec::new();
        for (idx, drawable) in self.drawables_3d.iter().enumerate() {
            let Some(drawable) = drawable else { continue };
            let Some(transform) = self.transforms.get(idx).and_then(|t| *t) else {
                continue;
            };
            out.push((EntityId(Handle::new(idx as u32, 0)), transform, *drawable));
        }
        out
    }

    fn ensure_capacity(&mut self, idx: usize) {
        if self.transforms.len() <= idx {
            let new_len = idx + 1;
            self.transforms.resize(new_len, None);
            self.drawables_3d.resize(new_len, None);
            self.materials.resize(new_len, None);
            self.overlay_refs.resize(new_len, None);
        }
    }
}
