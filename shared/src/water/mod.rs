//! Water surface queries against static world geometry.

pub mod surface;

pub use surface::*;
