//! Umbrella crate for the `moore-contour` workspace.
//!
//! Re-exports the binary grid primitives of `mc-core` and the Moore-neighborhood
//! tracer of `mc-trace`.

pub use mc_core::*;
pub use mc_trace::*;
