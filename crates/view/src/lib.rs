pub mod camera;
pub mod config;
pub mod host;
pub mod render;

pub use camera::*;
pub use config::*;
pub use host::*;
pub use render::*;
