pub mod components;
pub mod entity;
pub mod globe;
pub mod marker;
pub mod world;

pub use world::*;
