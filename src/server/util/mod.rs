//! Small helpers shared across layers.

pub mod extract;
pub mod id;
