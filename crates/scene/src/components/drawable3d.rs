#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Shape3D {
    Sphere { radius: f64 },
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Drawable3D {
    pub shape: Shape3D,
}

impl Drawable3D {
    pub fn sphere(radius: f64) -> Self {
        Self {
            shape: Shape3D::Sphere { radius },
        }
    }

    pub fn radius(&self) -> f64 {
        match self.shape {
            Shape3D::Sphere { radius } => radius,
        }
    }
}
