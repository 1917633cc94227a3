pub mod api;
pub mod catchers;
pub mod general;

pub use general::*;
