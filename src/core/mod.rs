//! Core processing building blocks: resize geometry, padding, and the square
//! transform, plus the `ProcessingParams` configuration record. These are internal
//! primitives consumed by the high-level `api` module.
pub mod params;
pub mod processing;
