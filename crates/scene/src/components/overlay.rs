use foundation::math::Vec3;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct OverlayId(pub u32);

/// Polygon rings lying on the globe surface, in scene coordinates.
///
/// Ring data is stored in a world side table (it is large and never copied
/// per frame); entities reference it through [`ComponentOverlay`].
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceOverlay {
    pub rings: Vec<Vec<Vec3>>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComponentOverlay {
    pub id: OverlayId,
}

impl ComponentOverlay {
    pub fn new(id: OverlayId) -> Self {
        Self { id }
    }
}
