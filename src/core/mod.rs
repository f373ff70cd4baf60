//! Core processing building blocks: the block-grid tile engine, the band
//! fan-out coordinator, and the shipped block transforms. These are internal
//! primitives consumed by the high-level `api` module.
pub mod params;
pub mod processing;
