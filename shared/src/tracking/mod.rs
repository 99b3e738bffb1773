//! Per-entity water state machines: entry detection, dropped item polling and
//! weapon swing throttling.

pub mod dropped;
pub mod entry;
pub mod weapon;

pub use dropped::*;
pub use entry::*;
pub use weapon::*;
