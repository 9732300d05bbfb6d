pub mod boundary;
pub mod overlay;

pub use boundary::*;
pub use overlay::*;
