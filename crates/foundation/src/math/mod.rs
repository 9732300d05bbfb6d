pub mod projection;
pub mod vec;

pub use projection::*;
pub use vec::*;
