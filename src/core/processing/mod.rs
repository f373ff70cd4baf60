//! Processing engine: `transforms` defines the per-block policies, `tile`
//! walks the block grid single-threaded, `bands` fans tiles out over
//! concurrent horizontal bands and reassembles the result.
pub mod bands;
pub mod tile;
pub mod transforms;
