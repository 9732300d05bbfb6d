pub mod consumer;
pub mod events;

pub use consumer::*;
pub use events::*;
