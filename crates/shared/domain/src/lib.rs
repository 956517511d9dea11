//! # Domain Models
//!
//! Pure data for the `FoodPacker` shell: the static theme palette and the host settings.
//! Keep it lean: no I/O, rendering, or global state; just data and small helpers.

pub mod config;
pub mod theme;
