pub mod drawable3d;
pub mod material;
pub mod overlay;
pub mod transform;

pub use drawable3d::*;
pub use material::*;
pub use overlay::*;
pub use transform::*;
